//! Repository for the `order_products` line-item table.
//!
//! Rows are keyed by the composite (order_id, product_id) pair, so every
//! lookup takes both halves of the key.

use commerce_core::types::DbId;
use sqlx::PgPool;

use crate::models::order_product::{CreateOrderProduct, OrderProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "order_id, product_id, quantity";

/// Provides operations for order line items.
pub struct OrderProductRepo;

impl OrderProductRepo {
    /// Insert a line item, returning the created row.
    ///
    /// Fails with a primary-key violation if the (order, product) pair
    /// already has a line item.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOrderProduct,
    ) -> Result<OrderProduct, sqlx::Error> {
        let query = format!(
            "INSERT INTO order_products (order_id, product_id, quantity)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OrderProduct>(&query)
            .bind(input.order_id)
            .bind(input.product_id)
            .bind(input.quantity)
            .fetch_one(pool)
            .await
    }

    /// Find a line item by its composite key.
    pub async fn find(
        pool: &PgPool,
        order_id: DbId,
        product_id: DbId,
    ) -> Result<Option<OrderProduct>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM order_products WHERE order_id = $1 AND product_id = $2");
        sqlx::query_as::<_, OrderProduct>(&query)
            .bind(order_id)
            .bind(product_id)
            .fetch_optional(pool)
            .await
    }

    /// List all line items for an order, in product-id order.
    pub async fn list_for_order(
        pool: &PgPool,
        order_id: DbId,
    ) -> Result<Vec<OrderProduct>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM order_products WHERE order_id = $1 ORDER BY product_id ASC"
        );
        sqlx::query_as::<_, OrderProduct>(&query)
            .bind(order_id)
            .fetch_all(pool)
            .await
    }

    /// Change the quantity of a line item. Returns `None` if the key is
    /// absent.
    pub async fn update_quantity(
        pool: &PgPool,
        order_id: DbId,
        product_id: DbId,
        quantity: i32,
    ) -> Result<Option<OrderProduct>, sqlx::Error> {
        let query = format!(
            "UPDATE order_products SET quantity = $3
             WHERE order_id = $1 AND product_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OrderProduct>(&query)
            .bind(order_id)
            .bind(product_id)
            .bind(quantity)
            .fetch_optional(pool)
            .await
    }

    /// Remove a line item. Returns `true` if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        order_id: DbId,
        product_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM order_products WHERE order_id = $1 AND product_id = $2")
                .bind(order_id)
                .bind(product_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
