//! Navigator
//!
//! Owns the current path. It is the single source of truth for which list
//! is shown and whether a side panel is open. Subscribers observe changes
//! through a watch channel.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::path::RoutePath;
use crate::route::Route;

#[derive(Debug)]
struct Inner {
    current: watch::Sender<RoutePath>,
    history: Mutex<Vec<RoutePath>>,
}

/// Application router state
///
/// Cloning shares the same location.
#[derive(Debug, Clone)]
pub struct Navigator {
    inner: Arc<Inner>,
}

impl Navigator {
    /// Navigator positioned at `start`
    #[must_use]
    pub fn new(start: RoutePath) -> Self {
        let (current, _) = watch::channel(start.clone());
        Self {
            inner: Arc::new(Inner {
                current,
                history: Mutex::new(vec![start]),
            }),
        }
    }

    /// Current path
    #[must_use]
    pub fn current(&self) -> RoutePath {
        self.inner.current.borrow().clone()
    }

    /// Route matched by the current path
    #[must_use]
    pub fn route(&self) -> Route {
        Route::resolve(&self.inner.current.borrow())
    }

    /// Push a new path
    pub fn navigate(&self, to: RoutePath) {
        tracing::info!(to = %to, "navigate");
        self.inner.history.lock().push(to.clone());
        self.inner.current.send_replace(to);
    }

    /// Return to the previous path, if any
    pub fn back(&self) -> Option<RoutePath> {
        let previous = {
            let mut history = self.inner.history.lock();
            if history.len() < 2 {
                return None;
            }
            history.pop();
            history.last().cloned()
        }?;
        tracing::info!(to = %previous, "navigate back");
        self.inner.current.send_replace(previous.clone());
        Some(previous)
    }

    /// Every path visited, oldest first
    #[must_use]
    pub fn history(&self) -> Vec<RoutePath> {
        self.inner.history.lock().clone()
    }

    /// Observe path changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RoutePath> {
        self.inner.current.subscribe()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(RoutePath::root())
    }
}
