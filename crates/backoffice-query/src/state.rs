//! Query and mutation state
//!
//! Failures are carried as values so callers can render them inline
//! instead of unwinding.

use parking_lot::Mutex;
use std::sync::Arc;

/// Lifecycle of a read query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryStatus {
    /// Query is disabled (e.g. no id to fetch)
    #[default]
    Idle,
    Loading,
    Success,
    /// Fetch failed with a human-readable message
    Error(String),
}

/// Data and status of one query
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    data: Option<T>,
    status: QueryStatus,
}

impl<T> QueryState<T> {
    #[inline]
    #[must_use]
    pub fn idle() -> Self {
        Self {
            data: None,
            status: QueryStatus::Idle,
        }
    }

    #[inline]
    #[must_use]
    pub fn loading() -> Self {
        Self {
            data: None,
            status: QueryStatus::Loading,
        }
    }

    #[inline]
    #[must_use]
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            status: QueryStatus::Success,
        }
    }

    #[inline]
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            status: QueryStatus::Error(message.into()),
        }
    }

    #[inline]
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> &QueryStatus {
        &self.status
    }

    #[inline]
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.status == QueryStatus::Idle
    }

    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }

    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == QueryStatus::Success
    }

    #[inline]
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self.status, QueryStatus::Error(_))
    }

    /// Error message, if the query failed
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            QueryStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self::idle()
    }
}

/// Lifecycle of one mutation handle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MutationState {
    #[default]
    Idle,
    Pending,
    Success,
    Error(String),
}

/// Shared state cell of a mutation handle
///
/// Tracks the most recent call only. Concurrent calls are not
/// de-duplicated; the last one to finish wins.
#[derive(Debug, Clone, Default)]
pub(crate) struct MutationTracker {
    state: Arc<Mutex<MutationState>>,
}

impl MutationTracker {
    pub(crate) fn begin(&self) {
        *self.state.lock() = MutationState::Pending;
    }

    pub(crate) fn succeed(&self) {
        *self.state.lock() = MutationState::Success;
    }

    pub(crate) fn fail(&self, message: impl Into<String>) {
        *self.state.lock() = MutationState::Error(message.into());
    }

    pub(crate) fn reset(&self) {
        *self.state.lock() = MutationState::Idle;
    }

    pub(crate) fn get(&self) -> MutationState {
        self.state.lock().clone()
    }
}
