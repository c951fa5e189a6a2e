//! Plain-text page rendering

use std::fmt::Write as _;

use backoffice_table::render_text;

use crate::layout::{LayoutBody, LayoutView, SEARCH_PLACEHOLDER};
use crate::panel::{PanelStatus, PanelView, CANCEL_LABEL, SAVE_LABEL};

/// Draw a list page and its panel for a terminal
#[must_use]
pub fn render_page(view: &LayoutView) -> String {
    let mut out = String::new();
    let crumbs: Vec<&str> = view.breadcrumb.iter().map(|c| c.label.as_str()).collect();
    let _ = writeln!(out, "{}", crumbs.join(" / "));

    let search = if view.search.is_empty() {
        SEARCH_PLACEHOLDER
    } else {
        view.search.as_str()
    };
    let _ = writeln!(out, "[{search}]  [+ {}]", view.create_label);
    out.push('\n');

    match &view.body {
        LayoutBody::Loading => out.push_str("Carregando...\n"),
        LayoutBody::Error(message) => {
            let _ = writeln!(out, "Erro: {message}");
        }
        LayoutBody::Table(table) => out.push_str(&render_text(table)),
    }

    if let Some(panel) = &view.panel {
        out.push('\n');
        out.push_str(&render_panel(panel));
    }
    out
}

fn button(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{label}]")
    } else {
        format!("({label})")
    }
}

/// Draw a side panel; disabled buttons are shown in parentheses
#[must_use]
pub fn render_panel(panel: &PanelView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", panel.title);
    let _ = writeln!(out, "{}", panel.description);

    match &panel.status {
        PanelStatus::Loading => out.push_str("Carregando...\n"),
        PanelStatus::NotFound(id) => {
            let _ = writeln!(out, "Registro {id} não encontrado");
        }
        PanelStatus::Ready => {
            for field in &panel.fields {
                let _ = writeln!(out, "{}: {}", field.label, field.value);
                for (_, message) in panel.errors.iter().filter(|(f, _)| f == field.name) {
                    let _ = writeln!(out, "  ! {message}");
                }
            }
        }
    }

    let _ = writeln!(
        out,
        "{} {}",
        button(SAVE_LABEL, panel.save_enabled),
        button(CANCEL_LABEL, panel.cancel_enabled)
    );
    out
}
