//! Order Lifecycle Manager
//!
//! Create/update as an explicit ordered pipeline: validate items →
//! compute total → allocate number (create only) → persist. The total
//! is derived state; whatever the caller put in `total_amount` is
//! discarded here, and `order_number` can never be patched.

use crate::db::repository::{RepoError, order};
use crate::orders::{sequence, total};
use shared::models::{LineItem, Order, OrderCreate, OrderUpdate};
use sqlx::SqlitePool;
use thiserror::Error;

/// Lifecycle errors
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Order number allocation failed: {0}")]
    Allocation(String),

    #[error(transparent)]
    Repo(#[from] RepoError),
}

fn validate_items(items: &[LineItem]) -> Result<(), OrderError> {
    for (index, item) in items.iter().enumerate() {
        if item.name.trim().is_empty() {
            return Err(OrderError::Validation(format!(
                "Item {index}: name must not be empty"
            )));
        }
        if item.quantity < 1 {
            return Err(OrderError::Validation(format!(
                "Item {index}: quantity must be at least 1"
            )));
        }
        if item.price < 0.0 {
            return Err(OrderError::Validation(format!(
                "Item {index}: price must not be negative"
            )));
        }
    }
    Ok(())
}

/// Create an order: the number is assigned exactly once, here.
pub async fn create(pool: &SqlitePool, data: OrderCreate) -> Result<Order, OrderError> {
    validate_items(&data.items)?;

    let total_amount = total::compute_total(&data.items);
    let order_number = sequence::allocate(pool)
        .await
        .map_err(|e| OrderError::Allocation(e.to_string()))?;

    let now = shared::util::now_millis();
    let order = Order {
        id: shared::util::snowflake_id(),
        order_number,
        customer_id: data.customer_id,
        items: data.items,
        total_amount,
        status: data.status.unwrap_or_default(),
        payment_status: data.payment_status.unwrap_or_default(),
        payment_method: data.payment_method,
        shipping_address: data.shipping_address,
        notes: data.notes,
        created_at: now,
        updated_at: now,
    };

    order::insert(pool, &order).await?;

    tracing::info!(
        order_number = %order.order_number,
        customer_id = order.customer_id,
        total = order.total_amount,
        "Order created"
    );
    Ok(order)
}

/// Apply a patch. Whenever the patch carries `items` — even an
/// identical list — the total is recomputed before persisting.
pub async fn update(pool: &SqlitePool, id: i64, data: OrderUpdate) -> Result<Order, OrderError> {
    if let Some(items) = data.items.as_deref() {
        validate_items(items)?;
    }
    let recomputed_total = data.items.as_deref().map(total::compute_total);

    let order = order::update(pool, id, &data, recomputed_total).await?;
    Ok(order)
}
