use backoffice_entity::Category;
use backoffice_table::ColumnDef;

use super::{EntityCase, FormField};

impl EntityCase for Category {
    const NEW_TITLE: &'static str = "Nova Categoria";
    const SAVED: &'static str = "Categoria salva com sucesso";
    const REMOVED: &'static str = "Categoria removida com sucesso";

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::field("id", "Id"),
            ColumnDef::field("name", "Nome da Categoria"),
            ColumnDef::actions(),
        ]
    }

    fn form_fields(&self) -> Vec<FormField> {
        vec![FormField::new("name", "Nome", self.name.as_str())]
    }
}
