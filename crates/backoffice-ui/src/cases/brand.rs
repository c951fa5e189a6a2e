use backoffice_entity::Brand;
use backoffice_table::ColumnDef;

use super::{EntityCase, FormField};

impl EntityCase for Brand {
    const NEW_TITLE: &'static str = "Nova Marca";
    const SAVED: &'static str = "Marca salva com sucesso";
    const REMOVED: &'static str = "Marca removida com sucesso";

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::field("id", "Id"),
            ColumnDef::field("name", "Nome da Marca"),
            ColumnDef::actions(),
        ]
    }

    fn form_fields(&self) -> Vec<FormField> {
        vec![FormField::new("name", "Nome", self.name.as_str())]
    }
}
