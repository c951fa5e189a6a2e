//! Entity layout
//!
//! The list page of one entity: breadcrumb, search box, create button, the
//! data table fed by the list query, and an outlet where the side panel
//! mounts when the route selects `new` or an id.

use backoffice_entity::{EntityKind, EntityService};
use backoffice_query::{EntityQueries, QueryState};
use backoffice_router::{Navigator, Route, RoutePath, RowActionControl, NEW_SEGMENT};
use backoffice_table::{DataTable, Sort, TableError, TableState, TableView};

use crate::cases::EntityCase;
use crate::notify::Notifier;
use crate::panel::{PanelView, SidePanel};

type Record<S> = <S as EntityService>::Record;

pub const HOME_LABEL: &str = "Home";
pub const CREATE_LABEL: &str = "Adicionar";
pub const SEARCH_PLACEHOLDER: &str = "Search...";

/// One breadcrumb entry; the last one has no link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub link: Option<RoutePath>,
}

/// Body of the list page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutBody {
    Loading,
    Error(String),
    Table(TableView),
}

/// Renderable snapshot of a list page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutView {
    pub breadcrumb: Vec<Crumb>,
    pub search: String,
    pub create_label: &'static str,
    pub body: LayoutBody,
    /// Side panel mounted in the outlet, if the route opens one
    pub panel: Option<PanelView>,
}

/// List page of one entity type
#[derive(Debug)]
pub struct EntityLayout<S>
where
    S: EntityService,
    S::Record: EntityCase,
{
    queries: EntityQueries<S>,
    navigator: Navigator,
    notifier: Notifier,
    table: DataTable,
    state: TableState,
}

impl<S> EntityLayout<S>
where
    S: EntityService,
    S::Record: EntityCase,
{
    /// Layout with the entity's own columns
    ///
    /// # Errors
    /// [`TableError`] if the entity's column list is inconsistent
    pub fn new(
        queries: EntityQueries<S>,
        navigator: Navigator,
        notifier: Notifier,
    ) -> Result<Self, TableError> {
        Ok(Self {
            table: DataTable::new(Record::<S>::schema()?),
            queries,
            navigator,
            notifier,
            state: TableState::new(),
        })
    }

    /// Start from an existing sort and filter
    #[inline]
    #[must_use]
    pub fn with_state(mut self, state: TableState) -> Self {
        self.state = state;
        self
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.queries.kind()
    }

    #[inline]
    #[must_use]
    pub fn queries(&self) -> &EntityQueries<S> {
        &self.queries
    }

    #[inline]
    #[must_use]
    pub fn table_state(&self) -> &TableState {
        &self.state
    }

    /// `Home / {title}`
    #[must_use]
    pub fn breadcrumb(&self) -> Vec<Crumb> {
        vec![
            Crumb {
                label: HOME_LABEL.to_string(),
                link: Some(RoutePath::root()),
            },
            Crumb {
                label: self.kind().title().to_string(),
                link: None,
            },
        ]
    }

    /// Update the search box; filters the table locally, never the query
    pub fn search(&mut self, term: impl Into<String>) {
        self.state.set_filter(term);
    }

    pub fn sort_by(&mut self, sort: Option<Sort>) {
        self.state.set_sort(sort);
    }

    /// Header click on `column`
    pub fn toggle_sort(&mut self, column: &str) {
        self.state.toggle_sort(column);
    }

    /// Where the create button leads: `{list}/new`
    #[must_use]
    pub fn create_target(&self) -> RoutePath {
        RoutePath::list(self.kind()).child(NEW_SEGMENT)
    }

    /// Press the create button
    pub fn create(&self) -> RoutePath {
        let target = self.create_target();
        self.navigator.navigate(target.clone());
        target
    }

    /// Press the edit control of row `id`
    pub fn open_row(&self, id: &str) -> RoutePath {
        RowActionControl::edit(id).activate(&self.navigator)
    }

    /// Table body for a list query state
    #[must_use]
    pub fn body(&self, list: &QueryState<Vec<Record<S>>>) -> LayoutBody {
        if let Some(message) = list.error_message() {
            return LayoutBody::Error(message.to_string());
        }
        match list.data() {
            Some(rows) => match self.table.render(rows, &self.state) {
                Ok(view) => LayoutBody::Table(view),
                Err(err) => LayoutBody::Error(err.to_string()),
            },
            None => LayoutBody::Loading,
        }
    }

    /// Side panel for the current route, if it opens one for this entity
    pub async fn outlet(&self) -> Option<SidePanel<S>> {
        SidePanel::open(&self.queries, &self.navigator, &self.notifier).await
    }

    /// Whether the current route belongs to this page
    #[must_use]
    pub fn is_active(&self) -> bool {
        Route::resolve(&self.navigator.current()).entity() == Some(self.kind())
    }

    /// Read the list query and render the whole page
    pub async fn render(&self) -> LayoutView {
        let list = self.queries.list().await;
        let panel = self.outlet().await.map(|panel| panel.view());
        LayoutView {
            breadcrumb: self.breadcrumb(),
            search: self.state.filter().to_string(),
            create_label: CREATE_LABEL,
            body: self.body(&list),
            panel,
        }
    }
}
