//! Order entity model and DTOs.

use commerce_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An order row from the `orders` table.
///
/// Line items live in `order_products`; see
/// [`crate::models::order_product::OrderProduct`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub status: String,
    pub date_created: Timestamp,
}

/// DTO for creating an order. Status defaults to `"NEW"` when omitted.
#[derive(Debug, Default, Deserialize)]
pub struct CreateOrder {
    pub status: Option<String>,
}
