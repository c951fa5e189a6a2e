//! Backoffice UI
//!
//! Headless list pages and side-panel forms for the managed entities.
//! Every component produces a plain view value; drawing it is left to the
//! caller ([`render_page`] draws one for terminals).
//!
//! # Core Concepts
//!
//! - [`EntityLayout`]: List page with breadcrumb, search, create button,
//!   data table and the panel outlet
//! - [`SidePanel`]: Create/edit form whose mode follows the route
//! - [`EntityCase`]: Columns, form fields and messages of one entity
//! - [`Notifier`]: Success/error toasts on a broadcast channel
//! - [`AdminApp`]: Shared cache, navigator and query hooks
//!
//! # Example
//!
//! ```rust,ignore
//! use backoffice_ui::{AdminApp, AdminConfig, SidePanel};
//!
//! let app = AdminApp::connect(AdminConfig::load("backoffice.toml")?)?;
//! app.navigate("/categories/new")?;
//! let panel = SidePanel::open(app.categories(), app.navigator(), app.notifier())
//!     .await
//!     .expect("create route opens a panel");
//! panel.edit(|c| c.name = "Beverages".into());
//! panel.submit().await;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod app;
pub mod cases;
mod config;
mod error;
mod layout;
mod notify;
mod panel;
mod text;

pub use app::{AdminApp, Backend, HttpBackend, Services};
pub use cases::{status_badge, EntityCase, FormField};
pub use config::{AdminConfig, ConfigError};
pub use error::AdminError;
pub use layout::{Crumb, EntityLayout, LayoutBody, LayoutView, CREATE_LABEL, HOME_LABEL};
pub use notify::{Level, Notification, Notifier};
pub use panel::{
    PanelMode, PanelStatus, PanelView, RemoveOutcome, SidePanel, SubmitOutcome, PANEL_DESCRIPTION,
};
pub use text::{render_page, render_panel};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building backoffice pages
    pub use crate::{
        AdminApp, AdminConfig, AdminError, EntityCase, EntityLayout, Notifier, SidePanel,
        SubmitOutcome,
    };
}
