//! Side panel form
//!
//! The panel has no open flag of its own: its mode is derived from the
//! navigator's route when it is mounted.
//!
//! ```text
//! Closed ──/x/new──► Create ─┐
//!   ▲                        ├─ save ok / dismiss ──► Closed
//!   └─────/x/:id──► Edit ────┘
//! ```
//!
//! Edit panels start in [`PanelStatus::Loading`] until [`SidePanel::hydrate`]
//! fetches the record. Submitting runs the entity's validation first; only a
//! valid draft reaches the create/update mutation. While a mutation is in
//! flight every further submit is ignored.

use backoffice_entity::{Entity, EntityKind, EntityService, NewRecord, ValidationErrors};
use backoffice_query::{CreateMutation, DeleteMutation, EntityQueries, UpdateMutation};
use backoffice_router::{Navigator, Route, RoutePath};
use parking_lot::Mutex;

use crate::cases::{EntityCase, FormField};
use crate::notify::Notifier;

type Record<S> = <S as EntityService>::Record;

/// Description line under every panel title
pub const PANEL_DESCRIPTION: &str = "Preencha os campos abaixo e clique em \"Salvar\".";
pub const SAVE_LABEL: &str = "Salvar";
pub const CANCEL_LABEL: &str = "Cancelar";

/// Panel mode for one entity, derived from a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelMode {
    Closed,
    Create,
    Edit(String),
}

impl PanelMode {
    /// Mode of `kind`'s panel while `route` is active
    #[must_use]
    pub fn from_route(route: &Route, kind: EntityKind) -> Self {
        match route {
            Route::Create(k) if *k == kind => Self::Create,
            Route::Edit(k, id) if *k == kind && !id.is_empty() => Self::Edit(id.clone()),
            _ => Self::Closed,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Edit(id) => Some(id),
            _ => None,
        }
    }
}

/// Content state of an open panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelStatus {
    Loading,
    Ready,
    NotFound(String),
}

/// Result of [`SidePanel::submit`]
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    /// Mutation succeeded and the panel navigated away
    Saved(T),
    /// Draft failed validation; no mutation was issued
    Invalid(ValidationErrors),
    /// Mutation failed; the panel stays open
    Failed(String),
    /// Submit was not possible (pending, loading or not found)
    Ignored,
}

/// Result of [`SidePanel::remove`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    Failed(String),
    Ignored,
}

/// Renderable snapshot of a panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub title: String,
    pub description: &'static str,
    pub status: PanelStatus,
    pub fields: Vec<FormField>,
    pub errors: Vec<(String, String)>,
    pub save_enabled: bool,
    pub cancel_enabled: bool,
    pub remove_enabled: bool,
}

#[derive(Debug)]
struct Form<T> {
    status: PanelStatus,
    draft: T,
    errors: ValidationErrors,
}

/// Routed create/edit form for one entity type
#[derive(Debug)]
pub struct SidePanel<S>
where
    S: EntityService,
    S::Record: EntityCase,
{
    mode: PanelMode,
    path: RoutePath,
    queries: EntityQueries<S>,
    navigator: Navigator,
    notifier: Notifier,
    form: Mutex<Form<Record<S>>>,
    create: CreateMutation<S>,
    update: UpdateMutation<S>,
    delete: DeleteMutation<S>,
}

impl<S> SidePanel<S>
where
    S: EntityService,
    S::Record: EntityCase,
{
    /// Mount for the navigator's current route; `None` when it opens no panel
    /// for this entity
    #[must_use]
    pub fn mount(
        queries: &EntityQueries<S>,
        navigator: &Navigator,
        notifier: &Notifier,
    ) -> Option<Self> {
        let path = navigator.current();
        let mode = PanelMode::from_route(&Route::resolve(&path), queries.kind());
        let status = match mode {
            PanelMode::Closed => return None,
            PanelMode::Create => PanelStatus::Ready,
            PanelMode::Edit(_) => PanelStatus::Loading,
        };
        tracing::debug!(%path, ?mode, "side panel mounted");
        Some(Self {
            mode,
            path,
            queries: queries.clone(),
            navigator: navigator.clone(),
            notifier: notifier.clone(),
            form: Mutex::new(Form {
                status,
                draft: Record::<S>::default(),
                errors: ValidationErrors::default(),
            }),
            create: queries.create(),
            update: queries.update(),
            delete: queries.delete(),
        })
    }

    /// Mount and hydrate in one step
    pub async fn open(
        queries: &EntityQueries<S>,
        navigator: &Navigator,
        notifier: &Notifier,
    ) -> Option<Self> {
        let panel = Self::mount(queries, navigator, notifier)?;
        panel.hydrate().await;
        Some(panel)
    }

    /// Load the edited record into the draft
    ///
    /// Create panels are ready on mount; this is a no-op for them. A failed
    /// read leaves the panel in [`PanelStatus::NotFound`].
    pub async fn hydrate(&self) {
        let Some(id) = self.mode.id() else {
            return;
        };
        let state = self.queries.get_by_id(Some(id)).await;
        let mut form = self.form.lock();
        match state.into_data() {
            Some(record) => {
                form.draft = record;
                form.status = PanelStatus::Ready;
            }
            None => {
                tracing::warn!(id, entity = %self.queries.kind(), "record not found for panel");
                form.status = PanelStatus::NotFound(id.to_string());
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn mode(&self) -> &PanelMode {
        &self.mode
    }

    /// Route the panel was mounted for
    #[inline]
    #[must_use]
    pub fn path(&self) -> &RoutePath {
        &self.path
    }

    #[must_use]
    pub fn status(&self) -> PanelStatus {
        self.form.lock().status.clone()
    }

    #[must_use]
    pub fn title(&self) -> String {
        match self.mode {
            PanelMode::Edit(_) => format!("Editar {}", self.queries.kind().singular()),
            _ => Record::<S>::NEW_TITLE.to_string(),
        }
    }

    #[inline]
    #[must_use]
    pub fn description(&self) -> &'static str {
        PANEL_DESCRIPTION
    }

    /// Copy of the current draft
    #[must_use]
    pub fn draft(&self) -> Record<S> {
        self.form.lock().draft.clone()
    }

    /// Change the draft in place
    pub fn edit(&self, change: impl FnOnce(&mut Record<S>)) {
        change(&mut self.form.lock().draft);
    }

    /// Messages from the last rejected submit
    #[must_use]
    pub fn errors(&self) -> ValidationErrors {
        self.form.lock().errors.clone()
    }

    #[must_use]
    pub fn field_error(&self, field: &str) -> Option<String> {
        self.form.lock().errors.field(field).map(str::to_string)
    }

    /// Check if any mutation of this panel is in flight
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.create.is_pending() || self.update.is_pending() || self.delete.is_pending()
    }

    #[must_use]
    pub fn save_enabled(&self) -> bool {
        !self.is_pending() && self.status() == PanelStatus::Ready
    }

    #[must_use]
    pub fn cancel_enabled(&self) -> bool {
        !self.is_pending()
    }

    #[must_use]
    pub fn remove_enabled(&self) -> bool {
        matches!(self.mode, PanelMode::Edit(_)) && self.save_enabled()
    }

    /// Validate the draft and run the create or update mutation
    pub async fn submit(&self) -> SubmitOutcome<Record<S>> {
        if !self.save_enabled() {
            tracing::debug!(path = %self.path, "submit ignored");
            return SubmitOutcome::Ignored;
        }

        let draft = self.draft();
        if let Err(errors) = draft.validate() {
            self.form.lock().errors = errors.clone();
            return SubmitOutcome::Invalid(errors);
        }
        self.form.lock().errors = ValidationErrors::default();

        let result = match &self.mode {
            PanelMode::Edit(id) => {
                let mut record = draft;
                record.set_id(Some(id.clone()));
                self.update.execute(id, record).await
            }
            _ => self.create.execute(NewRecord::new(draft)).await,
        };

        match result {
            Ok(saved) => {
                self.notifier.success(Record::<S>::SAVED);
                self.leave();
                SubmitOutcome::Saved(saved)
            }
            Err(err) => {
                let message = err.message();
                self.notifier.error(format!("Erro ao salvar: {message}"));
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Delete the edited record
    pub async fn remove(&self) -> RemoveOutcome {
        let Some(id) = self.mode.id() else {
            return RemoveOutcome::Ignored;
        };
        if !self.remove_enabled() {
            return RemoveOutcome::Ignored;
        }
        match self.delete.execute(id).await {
            Ok(()) => {
                self.notifier.success(Record::<S>::REMOVED);
                self.leave();
                RemoveOutcome::Removed
            }
            Err(err) => {
                let message = err.message();
                self.notifier.error(format!("Erro ao remover: {message}"));
                RemoveOutcome::Failed(message)
            }
        }
    }

    /// Close the panel: navigate to the mounted path minus its last segment
    ///
    /// Always allowed, even with a save in flight.
    pub fn dismiss(&self) -> RoutePath {
        let target = self.path.truncate_last();
        self.navigator.navigate(target.clone());
        target
    }

    // A dismissed panel whose save lands later must not navigate again.
    fn leave(&self) {
        if self.navigator.current() == self.path {
            self.dismiss();
        }
    }

    /// Snapshot for rendering
    #[must_use]
    pub fn view(&self) -> PanelView {
        let (status, fields, errors) = {
            let form = self.form.lock();
            let errors = form
                .errors
                .errors()
                .iter()
                .map(|e| (e.field.clone(), e.message.clone()))
                .collect();
            (form.status.clone(), form.draft.form_fields(), errors)
        };
        PanelView {
            title: self.title(),
            description: PANEL_DESCRIPTION,
            status,
            fields,
            errors,
            save_enabled: self.save_enabled(),
            cancel_enabled: self.cancel_enabled(),
            remove_enabled: self.remove_enabled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_from_route() {
        let kind = EntityKind::Category;
        assert_eq!(PanelMode::from_route(&Route::List(kind), kind), PanelMode::Closed);
        assert_eq!(PanelMode::from_route(&Route::Create(kind), kind), PanelMode::Create);
        assert_eq!(
            PanelMode::from_route(&Route::Edit(kind, "7".into()), kind),
            PanelMode::Edit("7".into())
        );
        assert_eq!(
            PanelMode::from_route(&Route::Edit(EntityKind::Brand, "7".into()), kind),
            PanelMode::Closed
        );
    }
}
