//! Order line-item model, keyed by the composite (order, product) pair.

use commerce_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A line item from the `order_products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderProduct {
    pub order_id: DbId,
    pub product_id: DbId,
    pub quantity: i32,
}

/// DTO for adding a line item to an order.
#[derive(Debug, Deserialize)]
pub struct CreateOrderProduct {
    pub order_id: DbId,
    pub product_id: DbId,
    pub quantity: i32,
}
