use backoffice_entity::Product;
use backoffice_table::{format, CellRender, ColumnDef};

use super::{EntityCase, FormField};

impl EntityCase for Product {
    const NEW_TITLE: &'static str = "Novo Produto";
    const SAVED: &'static str = "Produto salvo com sucesso";
    const REMOVED: &'static str = "Produto removido com sucesso";

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::field("id", "Id"),
            ColumnDef::field("name", "Nome do Produto"),
            ColumnDef::field("price", "Preço").render(CellRender::Currency),
            ColumnDef::field("category.name", "Categoria"),
            ColumnDef::field("brand.name", "Marca"),
            ColumnDef::field("active", "Ativo").render(CellRender::Boolean),
            ColumnDef::actions(),
        ]
    }

    fn form_fields(&self) -> Vec<FormField> {
        let name_of = |value: Option<&str>| value.unwrap_or_default().to_string();
        vec![
            FormField::new("name", "Nome", self.name.as_str()),
            FormField::new(
                "description",
                "Descrição",
                name_of(self.description.as_deref()),
            ),
            FormField::new("price", "Preço", format::currency_brl(self.price)),
            FormField::new(
                "category",
                "Categoria",
                name_of(self.category.as_ref().map(|c| c.name.as_str())),
            ),
            FormField::new(
                "brand",
                "Marca",
                name_of(self.brand.as_ref().map(|b| b.name.as_str())),
            ),
            FormField::new("active", "Ativo", format::boolean_pt_br(self.active)),
        ]
    }
}
