use backoffice_entity::{Order, OrderStatus};
use backoffice_table::{format, Badge, CellRender, ColumnDef, Tone};

use super::{EntityCase, FormField};

/// Badge for a wire status value (`"SHIPPED"` and so on)
#[must_use]
pub fn status_badge(raw: &str) -> Badge {
    let status = OrderStatus::from_wire(raw);
    let tone = match &status {
        OrderStatus::New => Tone::Info,
        OrderStatus::Separation | OrderStatus::Invoiced => Tone::Warning,
        OrderStatus::Shipped | OrderStatus::Delivered => Tone::Success,
        OrderStatus::Canceled => Tone::Danger,
        OrderStatus::Other(_) => Tone::Neutral,
    };
    Badge::new(status.label(), tone)
}

impl EntityCase for Order {
    const NEW_TITLE: &'static str = "Novo Pedido";
    const SAVED: &'static str = "Pedido salvo com sucesso";
    const REMOVED: &'static str = "Pedido removido com sucesso";

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::field("id", "Id"),
            ColumnDef::field("createdAt", "Data Pedido").render(CellRender::Date),
            ColumnDef::field("customer.name", "Nome Cliente"),
            ColumnDef::field("total", "Total").render(CellRender::Currency),
            ColumnDef::field("status", "Status").render(CellRender::StatusBadge(status_badge)),
            ColumnDef::actions(),
        ]
    }

    fn form_fields(&self) -> Vec<FormField> {
        let created = self
            .created_at
            .map(|ts| ts.format("%d/%m/%Y").to_string())
            .unwrap_or_default();
        vec![
            FormField::new("customer", "Cliente", self.customer.name.as_str()),
            FormField::new("status", "Status", self.status.label()),
            FormField::new("total", "Total", format::currency_brl(self.total)),
            FormField::new("items", "Itens", self.items.len().to_string()),
            FormField::new("createdAt", "Data Pedido", created),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_badges() {
        assert_eq!(status_badge("SHIPPED"), Badge::new("Enviado", Tone::Success));
        assert_eq!(status_badge("CANCELED"), Badge::new("Cancelado", Tone::Danger));
        assert_eq!(status_badge("PAID"), Badge::new("PAID", Tone::Neutral));
    }
}
