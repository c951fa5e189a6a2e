//! Backoffice Query Layer
//!
//! Cached reads and tracked mutations over entity services.
//!
//! # Architecture
//!
//! ```text
//! EntityLayout / SidePanel
//!        │ list() / get_by_id()            create() / update() / delete()
//!        ▼                                        │
//!   EntityQueries ──► QueryCache (moka) ◄── invalidate (InvalidationTable)
//!        │                                        │
//!        └──────────────► EntityService ◄─────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use backoffice_query::{EntityQueries, QueryCache};
//!
//! let queries = EntityQueries::new(Arc::new(service), QueryCache::default());
//! let categories = queries.list().await;
//! if let Some(rows) = categories.data() {
//!     println!("{} categories", rows.len());
//! }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod cache;
pub mod hooks;
pub mod invalidation;
pub mod key;
pub mod state;

pub use cache::{CacheConfig, CacheStats, QueryCache};
pub use hooks::{CreateMutation, DeleteMutation, EntityQueries, UpdateMutation};
pub use invalidation::{InvalidationTable, MutationKind, Target};
pub use key::{QueryKey, Scope};
pub use state::{MutationState, QueryState, QueryStatus};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
