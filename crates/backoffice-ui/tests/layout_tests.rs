use std::sync::Arc;

use backoffice_entity::{Brand, Category, EntityError, Order, Product};
use backoffice_query::{EntityQueries, QueryCache, QueryState};
use backoffice_router::{Navigator, RoutePath};
use backoffice_table::{Badge, Cell, Sort, Tone};
use backoffice_test_utils::{brands, categories, orders, products, Call, InMemoryService};
use backoffice_ui::{
    render_page, AdminApp, AdminConfig, AdminError, Backend, EntityCase, EntityLayout,
    LayoutBody, Notifier, Services,
};
use pretty_assertions::assert_eq;

fn layout_at<T>(path: &str, records: Vec<T>) -> (Arc<InMemoryService<T>>, EntityLayout<InMemoryService<T>>, Navigator)
where
    T: EntityCase,
{
    let service = InMemoryService::shared(records);
    let navigator = Navigator::new(path.parse().unwrap());
    let layout = EntityLayout::new(
        EntityQueries::new(Arc::clone(&service), QueryCache::default()),
        navigator.clone(),
        Notifier::default(),
    )
    .unwrap();
    (service, layout, navigator)
}

fn table(body: &LayoutBody) -> &backoffice_table::TableView {
    match body {
        LayoutBody::Table(view) => view,
        other => panic!("expected a table, got {other:?}"),
    }
}

#[test]
fn every_case_schema_is_consistent() {
    Category::schema().unwrap();
    Brand::schema().unwrap();
    Product::schema().unwrap();

    let schema = Order::schema().unwrap();
    let sample = serde_json::to_value(&orders()[0]).unwrap();
    schema.check(&sample).unwrap();
}

#[tokio::test]
async fn list_page_composition() {
    let (_, layout, _) = layout_at("/categories", categories());
    let view = layout.render().await;

    let crumbs: Vec<_> = view.breadcrumb.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(crumbs, vec!["Home", "Categorias"]);
    assert_eq!(view.breadcrumb[0].link, Some(RoutePath::root()));
    assert_eq!(view.create_label, "Adicionar");
    assert!(view.panel.is_none());

    let rows = table(&view.body);
    let headers: Vec<_> = rows.headers.iter().map(|h| h.label.as_str()).collect();
    assert_eq!(headers, vec!["Id", "Nome da Categoria", ""]);
    assert_eq!(rows.column_text("name"), vec!["Bebidas", "Snacks"]);
}

#[tokio::test]
async fn search_filters_locally_without_refetching() {
    let (service, mut layout, _) = layout_at("/categories", categories());
    layout.render().await;

    layout.search("snack");
    let view = layout.render().await;

    assert_eq!(table(&view.body).column_text("name"), vec!["Snacks"]);
    assert_eq!(view.search, "snack");
    let lists = service.calls().into_iter().filter(|c| *c == Call::List).count();
    assert_eq!(lists, 1);
}

#[tokio::test]
async fn sorting_is_local_state() {
    let (_, mut layout, _) = layout_at("/categories", categories());
    layout.sort_by(Some(Sort::descending("name")));
    let view = layout.render().await;
    assert_eq!(table(&view.body).column_text("name"), vec!["Snacks", "Bebidas"]);

    layout.toggle_sort("id");
    let view = layout.render().await;
    assert_eq!(table(&view.body).column_text("id"), vec!["1", "7"]);
}

#[tokio::test]
async fn failed_list_renders_inline_error() {
    let (service, layout, _) = layout_at("/categories", categories());
    service.fail_next(EntityError::Transport("connection refused".into()));

    let view = layout.render().await;
    assert!(matches!(view.body, LayoutBody::Error(ref m) if m.contains("connection refused")));
}

#[test]
fn pending_list_renders_loading() {
    let (_, layout, _) = layout_at("/categories", categories());
    assert_eq!(layout.body(&QueryState::loading()), LayoutBody::Loading);
}

#[test]
fn create_button_opens_new_route() {
    let (_, layout, navigator) = layout_at("/brands", brands());
    assert_eq!(layout.create_target().to_string(), "/brands/new");
    layout.create();
    assert_eq!(navigator.current().to_string(), "/brands/new");
    assert!(layout.is_active());
}

#[tokio::test]
async fn outlet_mounts_panel_for_detail_routes() {
    let (_, layout, navigator) = layout_at("/categories/7", categories());
    let view = layout.render().await;

    let panel = view.panel.expect("edit route mounts a panel");
    assert_eq!(panel.title, "Editar Categoria");
    assert_eq!(panel.fields[0].value, "Snacks");
    assert!(panel.save_enabled);

    navigator.navigate("/categories".parse().unwrap());
    assert!(layout.render().await.panel.is_none());
}

#[tokio::test]
async fn order_rows_use_their_own_columns() {
    let (_, layout, navigator) = layout_at("/orders/1", orders());
    let view = layout.render().await;
    let rows = table(&view.body);

    let headers: Vec<_> = rows.headers.iter().map(|h| h.label.as_str()).collect();
    assert_eq!(
        headers,
        vec!["Id", "Data Pedido", "Nome Cliente", "Total", "Status", ""]
    );
    assert_eq!(rows.column_text("createdAt"), vec!["05/03/2024", "20/11/2024"]);
    assert_eq!(rows.column_text("total"), vec!["R$ 1.234,56", "R$ 19,80"]);
    assert_eq!(
        rows.cell(0, "status"),
        Some(&Cell::Badge(Badge::new("Enviado", Tone::Success)))
    );

    // row action from an open detail route replaces the id
    let action = rows.cell(1, "actions").and_then(Cell::action).unwrap();
    action.activate(&navigator);
    assert_eq!(navigator.current().to_string(), "/orders/2");
    assert_eq!(layout.open_row("1").to_string(), "/orders/1");
}

#[tokio::test]
async fn products_render_nested_names() {
    let (_, layout, _) = layout_at("/products", products());
    let view = layout.render().await;
    let rows = table(&view.body);
    assert_eq!(rows.column_text("category.name"), vec!["Bebidas", "Snacks"]);
    assert_eq!(rows.column_text("brand.name"), vec!["Acme", ""]);
    assert_eq!(rows.column_text("price"), vec!["R$ 9,90", "R$ 12,50"]);
    assert_eq!(rows.column_text("active"), vec!["Sim", "Sim"]);
}

struct Memory;

impl Backend for Memory {
    type Categories = InMemoryService<Category>;
    type Brands = InMemoryService<Brand>;
    type Products = InMemoryService<Product>;
    type Orders = InMemoryService<Order>;
}

fn app() -> AdminApp<Memory> {
    AdminApp::with_services(
        AdminConfig::default(),
        Services {
            categories: InMemoryService::shared(categories()),
            brands: InMemoryService::shared(brands()),
            products: InMemoryService::shared(products()),
            orders: InMemoryService::shared(orders()),
        },
    )
}

#[tokio::test]
async fn app_renders_pages_by_route() {
    let app = app();
    app.navigate("/orders").unwrap();
    let text = render_page(&app.page(Default::default()).await.unwrap());

    assert!(text.starts_with("Home / Pedidos\n"));
    assert!(text.contains("[Search...]  [+ Adicionar]"));
    assert!(text.contains("Maria Souza"));
    assert!(text.contains("R$ 1.234,56"));
    assert!(text.contains("[Enviado]"));
}

#[tokio::test]
async fn app_renders_panel_below_the_table() {
    let app = app();
    app.navigate("/categories/7").unwrap();
    let text = render_page(&app.page(Default::default()).await.unwrap());

    assert!(text.contains("== Editar Categoria =="));
    assert!(text.contains("Nome: Snacks"));
    assert!(text.contains("[Salvar] [Cancelar]"));
}

#[tokio::test]
async fn app_rejects_pages_outside_entities() {
    let app = app();
    app.navigate("/").unwrap();
    assert!(matches!(app.page(Default::default()).await, Err(AdminError::NoPage(_))));
    assert!(matches!(app.navigate("categories"), Err(AdminError::Route(_))));
}

#[tokio::test]
async fn app_delete_invalidates_the_list() {
    let app = app();
    app.navigate("/categories").unwrap();
    app.page(Default::default()).await.unwrap();

    app.delete(backoffice_entity::EntityKind::Category, "7").await.unwrap();
    let view = app.page(Default::default()).await.unwrap();
    assert_eq!(table(&view.body).column_text("name"), vec!["Bebidas"]);

    let err = app
        .delete(backoffice_entity::EntityKind::Category, "7")
        .await
        .unwrap_err();
    assert!(err.is_service());
}
