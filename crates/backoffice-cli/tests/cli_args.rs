use std::io::Write;

use backoffice_cli::{resolve_config, Cli, Command};
use backoffice_entity::EntityKind;
use backoffice_table::Sort;
use clap::Parser;
use pretty_assertions::assert_eq;

#[test]
fn parses_list_with_search_and_sort() {
    let cli = Cli::try_parse_from([
        "backoffice", "list", "orders", "--search", "maria", "--sort", "total:desc",
    ])
    .unwrap();

    match cli.command {
        Command::List {
            entity,
            search,
            sort,
        } => {
            assert_eq!(entity, EntityKind::Order);
            assert_eq!(search.as_deref(), Some("maria"));
            assert_eq!(sort, Some(Sort::descending("total")));
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn singular_entity_names_are_accepted() {
    let cli = Cli::try_parse_from(["backoffice", "delete", "category", "7"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Delete { entity: EntityKind::Category, ref id } if id == "7"
    ));
}

#[test]
fn unknown_entity_is_a_usage_error() {
    assert!(Cli::try_parse_from(["backoffice", "list", "customers"]).is_err());
    assert!(Cli::try_parse_from(["backoffice", "list", "orders", "--sort", "total:up"]).is_err());
}

#[test]
fn global_flags_follow_subcommands() {
    let cli = Cli::try_parse_from([
        "backoffice", "show", "/categories/7", "--api", "http://api.test", "--log-json",
    ])
    .unwrap();
    assert!(cli.log_json);
    assert_eq!(cli.api.as_deref(), Some("http://api.test"));
}

#[test]
fn api_flag_overrides_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "api_base_url = \"http://from-file\"\nstale_time_secs = 5").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let cli = Cli::try_parse_from(["backoffice", "--config", &path, "list", "brands"]).unwrap();
    let config = resolve_config(&cli).unwrap();
    assert_eq!(config.api_base_url, "http://from-file");
    assert_eq!(config.stale_time_secs, 5);

    let cli = Cli::try_parse_from([
        "backoffice", "--config", &path, "--api", "http://override", "list", "brands",
    ])
    .unwrap();
    assert_eq!(resolve_config(&cli).unwrap().api_base_url, "http://override");
}

#[test]
fn missing_config_file_is_reported() {
    let cli = Cli::try_parse_from(["backoffice", "--config", "/nonexistent/backoffice.toml", "list", "brands"])
        .unwrap();
    let err = resolve_config(&cli).unwrap_err();
    assert!(err.to_string().contains("loading /nonexistent/backoffice.toml"));
}

#[test]
fn out_of_range_gc_time_is_a_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "gc_time_secs = 100000000000").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let cli = Cli::try_parse_from(["backoffice", "--config", &path, "list", "brands"]).unwrap();
    let err = resolve_config(&cli).unwrap_err();
    assert!(format!("{err:#}").contains("gc_time_secs = 100000000000 is out of range"));
}
