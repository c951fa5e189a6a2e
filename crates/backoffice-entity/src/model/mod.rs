//! Concrete entity records
//!
//! - Category: product grouping
//! - Brand: product manufacturer
//! - Product: sellable item with price and references
//! - Order: customer purchase with line items

pub mod brand;
pub mod category;
pub mod order;
pub mod product;

pub use brand::Brand;
pub use category::Category;
pub use order::{Customer, Order, OrderItem, OrderStatus};
pub use product::Product;
