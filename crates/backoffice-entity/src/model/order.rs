//! Order records
//!
//! An order embeds its customer and line items; timestamps are assigned by
//! the service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::kind::EntityKind;
use crate::model::Product;
use crate::record::Entity;
use crate::validation::{ValidationErrors, Validator};

/// Customer reference embedded in an order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

/// Order lifecycle status as sent by the API
///
/// The API types the status as a free string. Values outside the known set
/// are kept verbatim in [`OrderStatus::Other`] so a record is written back
/// exactly as it was read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    #[default]
    New,
    Separation,
    Invoiced,
    Shipped,
    Delivered,
    Canceled,
    Other(String),
}

impl OrderStatus {
    /// Label shown on the status badge; unrecognised values show as sent
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::New => "Novo",
            Self::Separation => "Em separação",
            Self::Invoiced => "Faturado",
            Self::Shipped => "Enviado",
            Self::Delivered => "Entregue",
            Self::Canceled => "Cancelado",
            Self::Other(raw) => raw,
        }
    }

    /// Wire form (`"SHIPPED"` and so on)
    #[must_use]
    pub fn as_wire(&self) -> &str {
        match self {
            Self::New => "NEW",
            Self::Separation => "SEPARATION",
            Self::Invoiced => "INVOICED",
            Self::Shipped => "SHIPPED",
            Self::Delivered => "DELIVERED",
            Self::Canceled => "CANCELED",
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "NEW" => Self::New,
            "SEPARATION" => Self::Separation,
            "INVOICED" => Self::Invoiced,
            "SHIPPED" => Self::Shipped,
            "DELIVERED" => Self::Delivered,
            "CANCELED" => Self::Canceled,
            other => Self::Other(other.to_string()),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match Self::from_wire(&value) {
            Self::Other(_) => Self::Other(value),
            known => known,
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(raw) => raw,
            known => known.as_wire().to_string(),
        }
    }
}

/// One product line of an order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub product: Product,
    pub quantity: u32,
    pub value: f64,
}

impl OrderItem {
    #[inline]
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.value
    }
}

/// Customer order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub customer: Customer,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Sum of the line subtotals
    #[must_use]
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }
}

impl Entity for Order {
    const KIND: EntityKind = EntityKind::Order;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(
                "customer",
                self.customer.id.is_some(),
                "Selecione um cliente",
            )
            .check("items", !self.items.is_empty(), "Adicione ao menos um item")
            .check(
                "items",
                self.items.iter().all(|item| item.quantity > 0),
                "A quantidade deve ser maior que zero",
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_api_shape() {
        let json = r#"{
            "id": "1",
            "customer": {"id": "c1", "name": "Maria"},
            "status": "SHIPPED",
            "total": 59.9,
            "items": [{"product": {"name": "Cola", "price": 5.99}, "quantity": 10, "value": 5.99}],
            "createdAt": "2024-03-05T12:00:00Z"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(order.customer.name, "Maria");
        assert_eq!(order.items.len(), 1);
        assert!((order.items_total() - 59.9).abs() < 1e-9);
        assert!(order.created_at.is_some());
    }

    #[test]
    fn unknown_status_is_kept_verbatim() {
        assert_eq!(
            OrderStatus::from_wire("LOST_IN_SPACE"),
            OrderStatus::Other("LOST_IN_SPACE".into())
        );
        assert_eq!(OrderStatus::from_wire("CANCELED"), OrderStatus::Canceled);
        assert!(!OrderStatus::from_wire("PAID").is_known());
    }

    #[test]
    fn unrecognised_status_survives_a_round_trip() {
        let json = r#"{"id":"9","customer":{"id":"c1","name":"Maria"},"status":"PAID","total":10.0}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status.label(), "PAID");

        let sent = serde_json::to_value(&order).unwrap();
        assert_eq!(sent["status"], "PAID");
    }

    #[test]
    fn known_status_serializes_to_wire_form() {
        let order = Order {
            status: OrderStatus::Invoiced,
            ..Order::default()
        };
        assert_eq!(serde_json::to_value(&order).unwrap()["status"], "INVOICED");
    }

    #[test]
    fn order_without_customer_or_total_still_decodes() {
        let orders: Vec<Order> = serde_json::from_str(
            r#"[{"id":"1","status":"NEW"},{"id":"2","customer":{"name":"Ana"},"total":5.0}]"#,
        )
        .unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].customer, Customer::default());
        assert_eq!(orders[0].total, 0.0);
        assert_eq!(orders[1].customer.name, "Ana");
    }

    #[test]
    fn empty_order_fails_validation() {
        let errors = Order::default().validate().unwrap_err();
        assert_eq!(errors.field("customer"), Some("Selecione um cliente"));
        assert_eq!(errors.field("items"), Some("Adicione ao menos um item"));
    }
}
