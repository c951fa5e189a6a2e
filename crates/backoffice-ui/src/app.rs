//! Application wiring
//!
//! [`AdminApp`] owns what every page shares: one query cache, one
//! navigator, one notification channel and a query hook set per entity.
//! Which services sit behind the hooks is chosen by a [`Backend`].

use std::sync::Arc;

use backoffice_entity::{
    Brand, Category, EntityKind, EntityService, HttpEntityService, Order, Product,
};
use backoffice_query::{EntityQueries, QueryCache};
use backoffice_router::{Navigator, Route, RoutePath};
use backoffice_table::TableState;

use crate::cases::EntityCase;
use crate::config::AdminConfig;
use crate::error::AdminError;
use crate::layout::{EntityLayout, LayoutView};
use crate::notify::Notifier;

/// Service types for each managed entity
pub trait Backend: Send + Sync + 'static {
    type Categories: EntityService<Record = Category>;
    type Brands: EntityService<Record = Brand>;
    type Products: EntityService<Record = Product>;
    type Orders: EntityService<Record = Order>;
}

/// JSON-over-HTTP services
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpBackend;

impl Backend for HttpBackend {
    type Categories = HttpEntityService<Category>;
    type Brands = HttpEntityService<Brand>;
    type Products = HttpEntityService<Product>;
    type Orders = HttpEntityService<Order>;
}

/// Service instances for one backend
pub struct Services<B: Backend> {
    pub categories: Arc<B::Categories>,
    pub brands: Arc<B::Brands>,
    pub products: Arc<B::Products>,
    pub orders: Arc<B::Orders>,
}

/// The backoffice application
pub struct AdminApp<B: Backend = HttpBackend> {
    config: AdminConfig,
    cache: QueryCache,
    navigator: Navigator,
    notifier: Notifier,
    categories: EntityQueries<B::Categories>,
    brands: EntityQueries<B::Brands>,
    products: EntityQueries<B::Products>,
    orders: EntityQueries<B::Orders>,
}

impl AdminApp<HttpBackend> {
    /// Application talking to the REST API named by `config`
    ///
    /// # Errors
    /// [`AdminError::Config`] for an invalid base URL, [`AdminError::Client`]
    /// if the HTTP client cannot be built
    pub fn connect(config: AdminConfig) -> Result<Self, AdminError> {
        let base = config.base_url()?;
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        tracing::info!(api = %base, "connecting to backoffice API");
        let services = Services::<HttpBackend> {
            categories: Arc::new(HttpEntityService::new(client.clone(), base.clone())),
            brands: Arc::new(HttpEntityService::new(client.clone(), base.clone())),
            products: Arc::new(HttpEntityService::new(client.clone(), base.clone())),
            orders: Arc::new(HttpEntityService::new(client, base)),
        };
        Ok(Self::with_services(config, services))
    }
}

impl<B: Backend> AdminApp<B> {
    /// Application over explicit services
    #[must_use]
    pub fn with_services(config: AdminConfig, services: Services<B>) -> Self {
        let cache = QueryCache::with_config(config.cache_config());
        Self {
            categories: EntityQueries::new(services.categories, cache.clone()),
            brands: EntityQueries::new(services.brands, cache.clone()),
            products: EntityQueries::new(services.products, cache.clone()),
            orders: EntityQueries::new(services.orders, cache.clone()),
            config,
            cache,
            navigator: Navigator::default(),
            notifier: Notifier::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    #[inline]
    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[inline]
    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    #[inline]
    #[must_use]
    pub fn categories(&self) -> &EntityQueries<B::Categories> {
        &self.categories
    }

    #[inline]
    #[must_use]
    pub fn brands(&self) -> &EntityQueries<B::Brands> {
        &self.brands
    }

    #[inline]
    #[must_use]
    pub fn products(&self) -> &EntityQueries<B::Products> {
        &self.products
    }

    #[inline]
    #[must_use]
    pub fn orders(&self) -> &EntityQueries<B::Orders> {
        &self.orders
    }

    /// Navigate to a textual path
    ///
    /// # Errors
    /// [`AdminError::Route`] if `path` is not absolute
    pub fn navigate(&self, path: &str) -> Result<Route, AdminError> {
        let path: RoutePath = path.parse()?;
        self.navigator.navigate(path);
        Ok(self.navigator.route())
    }

    /// Render the list page (and panel) of the current route
    ///
    /// # Errors
    /// [`AdminError::NoPage`] if the route belongs to no entity
    pub async fn page(&self, state: TableState) -> Result<LayoutView, AdminError> {
        let route = self.navigator.route();
        match route.entity() {
            Some(EntityKind::Category) => self.page_for(&self.categories, state).await,
            Some(EntityKind::Brand) => self.page_for(&self.brands, state).await,
            Some(EntityKind::Product) => self.page_for(&self.products, state).await,
            Some(EntityKind::Order) => self.page_for(&self.orders, state).await,
            None => Err(AdminError::NoPage(self.navigator.current())),
        }
    }

    /// Delete one record outside any panel
    ///
    /// # Errors
    /// [`AdminError::Entity`] if the service rejects the delete
    pub async fn delete(&self, kind: EntityKind, id: &str) -> Result<(), AdminError> {
        match kind {
            EntityKind::Category => self.categories.delete().execute(id).await?,
            EntityKind::Brand => self.brands.delete().execute(id).await?,
            EntityKind::Product => self.products.delete().execute(id).await?,
            EntityKind::Order => self.orders.delete().execute(id).await?,
        }
        self.notifier.success(format!("{} {id} removido(a)", kind.singular()));
        Ok(())
    }

    async fn page_for<S>(
        &self,
        queries: &EntityQueries<S>,
        state: TableState,
    ) -> Result<LayoutView, AdminError>
    where
        S: EntityService,
        S::Record: EntityCase,
    {
        let layout = EntityLayout::new(
            queries.clone(),
            self.navigator.clone(),
            self.notifier.clone(),
        )?
        .with_state(state);
        Ok(layout.render().await)
    }
}

impl<B: Backend> std::fmt::Debug for AdminApp<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminApp")
            .field("config", &self.config)
            .field("route", &self.navigator.current())
            .field("cache", &self.cache.stats())
            .finish_non_exhaustive()
    }
}
