//! Backoffice Router
//!
//! URL-driven navigation for entity pages.
//!
//! # Core Concepts
//!
//! - [`RoutePath`]: Normalised absolute path
//! - [`Route`]: Matched route (`List`, `Create`, `Edit`, ...)
//! - [`Navigator`]: Current location plus history; the single source of
//!   truth for which list and which side panel are active
//! - [`RowActionControl`]: Per-row control navigating to a detail route
//!
//! # Example
//!
//! ```rust
//! use backoffice_entity::EntityKind;
//! use backoffice_router::{Navigator, Route, RoutePath, RowActionControl};
//!
//! let nav = Navigator::new(RoutePath::list(EntityKind::Category));
//! RowActionControl::edit("7").activate(&nav);
//! assert_eq!(nav.route(), Route::Edit(EntityKind::Category, "7".into()));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod navigator;
mod path;
mod route;
mod row_action;

pub use navigator::Navigator;
pub use path::{RouteError, RoutePath, NEW_SEGMENT};
pub use route::Route;
pub use row_action::{is_addressable_id, RowActionControl, EDIT_TOOLTIP};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
