//! Entity query hooks
//!
//! [`EntityQueries`] wraps one [`EntityService`] with cached reads and
//! mutation handles:
//!
//! - `list()` / `get_by_id()` read through the [`QueryCache`]
//! - `create()` / `update()` / `delete()` hand out mutation handles that
//!   invalidate per the [`InvalidationTable`] once the service succeeds
//!
//! Reads never return `Err`; failures come back as [`QueryState::error`].

use std::future::Future;
use std::sync::Arc;

use backoffice_entity::{Entity, EntityError, EntityKind, EntityService, NewRecord};

use crate::cache::QueryCache;
use crate::invalidation::{InvalidationTable, MutationKind};
use crate::key::QueryKey;
use crate::state::{MutationState, MutationTracker, QueryState};

type Record<S> = <S as EntityService>::Record;

/// Cached reads and mutations for one entity type
#[derive(Debug)]
pub struct EntityQueries<S: EntityService> {
    service: Arc<S>,
    cache: QueryCache,
    invalidation: Arc<InvalidationTable>,
}

impl<S: EntityService> Clone for EntityQueries<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            cache: self.cache.clone(),
            invalidation: Arc::clone(&self.invalidation),
        }
    }
}

impl<S: EntityService> EntityQueries<S> {
    /// Hooks over `service` sharing `cache`, with the default invalidation table
    #[must_use]
    pub fn new(service: Arc<S>, cache: QueryCache) -> Self {
        Self {
            service,
            cache,
            invalidation: Arc::new(InvalidationTable::default()),
        }
    }

    /// Replace the invalidation table
    #[must_use]
    pub fn with_invalidation(mut self, table: InvalidationTable) -> Self {
        self.invalidation = Arc::new(table);
        self
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        Record::<S>::KIND
    }

    #[inline]
    #[must_use]
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    #[inline]
    #[must_use]
    pub fn service(&self) -> &Arc<S> {
        &self.service
    }

    /// Whole collection, fetched when absent or stale
    pub async fn list(&self) -> QueryState<Vec<Record<S>>> {
        let key = QueryKey::list(self.kind());
        self.read(key, || self.service.list()).await
    }

    /// One record; disabled (no service call) when `id` is absent or empty
    pub async fn get_by_id(&self, id: Option<&str>) -> QueryState<Record<S>> {
        let Some(id) = id.filter(|id| !id.is_empty()) else {
            return QueryState::idle();
        };
        let key = QueryKey::detail(self.kind(), id);
        self.read(key, || self.service.get_by_id(id)).await
    }

    /// Handle for creating records
    #[must_use]
    pub fn create(&self) -> CreateMutation<S> {
        CreateMutation {
            queries: self.clone(),
            tracker: MutationTracker::default(),
        }
    }

    /// Handle for updating records
    #[must_use]
    pub fn update(&self) -> UpdateMutation<S> {
        UpdateMutation {
            queries: self.clone(),
            tracker: MutationTracker::default(),
        }
    }

    /// Handle for deleting records
    #[must_use]
    pub fn delete(&self) -> DeleteMutation<S> {
        DeleteMutation {
            queries: self.clone(),
            tracker: MutationTracker::default(),
        }
    }

    async fn read<T, F, Fut>(&self, key: QueryKey, fetch: F) -> QueryState<T>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, EntityError>>,
    {
        if let Some(cached) = self.cache.fresh::<T>(&key).await {
            tracing::debug!(%key, "query cache hit");
            return QueryState::success(cached);
        }

        tracing::debug!(%key, "query cache miss, fetching");
        let generation = self.cache.generation(&key);
        match fetch().await {
            Ok(data) => {
                self.cache.insert_at(key, data.clone(), generation).await;
                QueryState::success(data)
            }
            Err(err) => {
                tracing::warn!(%key, error = %err, "query failed");
                QueryState::error(err.message())
            }
        }
    }

    /// Invalidate the keys of a successful mutation
    async fn settle(&self, kind: MutationKind, id: Option<&str>) {
        for key in self.invalidation.keys_for(kind, self.kind(), id) {
            self.cache.invalidate(&key).await;
        }
    }
}

/// Runs `op` under `tracker`, settling the cache before reporting success
async fn track<S, T, Fut>(
    queries: &EntityQueries<S>,
    tracker: &MutationTracker,
    kind: MutationKind,
    id: Option<&str>,
    op: Fut,
) -> Result<T, EntityError>
where
    S: EntityService,
    Fut: Future<Output = Result<T, EntityError>>,
{
    tracker.begin();
    match op.await {
        Ok(value) => {
            queries.settle(kind, id).await;
            tracker.succeed();
            tracing::info!(entity = %queries.kind(), ?kind, id, "mutation succeeded");
            Ok(value)
        }
        Err(err) => {
            tracker.fail(err.message());
            tracing::warn!(entity = %queries.kind(), ?kind, id, error = %err, "mutation failed");
            Err(err)
        }
    }
}

macro_rules! mutation_accessors {
    () => {
        /// Current state of the most recent call
        #[must_use]
        pub fn state(&self) -> MutationState {
            self.tracker.get()
        }

        #[must_use]
        pub fn is_pending(&self) -> bool {
            self.tracker.get() == MutationState::Pending
        }

        #[must_use]
        pub fn is_error(&self) -> bool {
            matches!(self.tracker.get(), MutationState::Error(_))
        }

        /// Forget the last outcome
        pub fn reset(&self) {
            self.tracker.reset();
        }
    };
}

/// Create mutation handle
#[derive(Debug)]
pub struct CreateMutation<S: EntityService> {
    queries: EntityQueries<S>,
    tracker: MutationTracker,
}

impl<S: EntityService> CreateMutation<S> {
    /// Create `record`; on success the list query is invalidated
    ///
    /// # Errors
    /// The service error, also kept in [`state`](Self::state)
    pub async fn execute(&self, record: NewRecord<Record<S>>) -> Result<Record<S>, EntityError> {
        let op = self.queries.service.create(record);
        track(&self.queries, &self.tracker, MutationKind::Create, None, op).await
    }

    mutation_accessors!();
}

/// Update mutation handle
#[derive(Debug)]
pub struct UpdateMutation<S: EntityService> {
    queries: EntityQueries<S>,
    tracker: MutationTracker,
}

impl<S: EntityService> UpdateMutation<S> {
    /// Replace record `id`; on success list and detail are invalidated and
    /// the returned record becomes the detail entry
    ///
    /// # Errors
    /// The service error, also kept in [`state`](Self::state)
    pub async fn execute(&self, id: &str, record: Record<S>) -> Result<Record<S>, EntityError> {
        let op = self.queries.service.update(id, record);
        let updated = track(&self.queries, &self.tracker, MutationKind::Update, Some(id), op).await?;
        self.queries
            .cache
            .insert(QueryKey::detail(self.queries.kind(), id), updated.clone())
            .await;
        Ok(updated)
    }

    mutation_accessors!();
}

/// Delete mutation handle
#[derive(Debug)]
pub struct DeleteMutation<S: EntityService> {
    queries: EntityQueries<S>,
    tracker: MutationTracker,
}

impl<S: EntityService> DeleteMutation<S> {
    /// Remove record `id`; on success list and detail are invalidated
    ///
    /// # Errors
    /// The service error, also kept in [`state`](Self::state)
    pub async fn execute(&self, id: &str) -> Result<(), EntityError> {
        let op = self.queries.service.delete(id);
        track(&self.queries, &self.tracker, MutationKind::Delete, Some(id), op).await
    }

    mutation_accessors!();
}
