//! Backoffice command line
//!
//! Renders list pages and side panels against the REST API:
//!
//! ```text
//! backoffice list orders --sort total:desc
//! backoffice show /categories/7
//! backoffice delete categories 7
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

use std::path::PathBuf;

use anyhow::Context;
use backoffice_entity::EntityKind;
use backoffice_table::{Sort, TableState};
use backoffice_ui::{render_page, AdminApp, AdminConfig};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Backoffice admin console
#[derive(Debug, Parser)]
#[command(name = "backoffice", version, about)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL, overriding the configuration
    #[arg(long, global = true)]
    pub api: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the list page of an entity
    List {
        entity: EntityKind,
        /// Keep rows containing this text
        #[arg(long)]
        search: Option<String>,
        /// Sort column, `column` or `column:desc`
        #[arg(long)]
        sort: Option<Sort>,
    },
    /// Render the page at a route, side panel included
    Show { path: String },
    /// Delete one record
    Delete { entity: EntityKind, id: String },
}

/// Install the global subscriber; `RUST_LOG` overrides the `info` default
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Configuration file (if any) with command line overrides applied
///
/// # Errors
/// The configuration file cannot be read or parsed
pub fn resolve_config(cli: &Cli) -> anyhow::Result<AdminConfig> {
    let mut config = match &cli.config {
        Some(path) => AdminConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => AdminConfig::default(),
    };
    if let Some(api) = &cli.api {
        config = config.with_api_base_url(api.clone());
    }
    Ok(config)
}

/// Execute one command and return what it prints
///
/// # Errors
/// Invalid configuration, an unknown route or a failed service call
pub async fn run(cli: Cli) -> anyhow::Result<String> {
    let config = resolve_config(&cli)?;
    tracing::info!(api = %config.api_base_url, command = ?cli.command, "backoffice starting");
    let app = AdminApp::connect(config)?;

    match cli.command {
        Command::List {
            entity,
            search,
            sort,
        } => {
            app.navigate(&format!("/{}", entity.segment()))?;
            let mut state = TableState::new();
            state.set_filter(search.unwrap_or_default());
            state.set_sort(sort);
            let page = app.page(state).await?;
            Ok(render_page(&page))
        }
        Command::Show { path } => {
            app.navigate(&path)?;
            let page = app.page(TableState::new()).await?;
            Ok(render_page(&page))
        }
        Command::Delete { entity, id } => {
            app.delete(entity, &id)
                .await
                .with_context(|| format!("deleting {} {id}", entity.singular()))?;
            Ok(format!("{} {id} removido(a)\n", entity.singular()))
        }
    }
}
