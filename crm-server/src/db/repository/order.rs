//! Order Repository
//!
//! Nested fields (`items`, `shipping_address`) are stored as JSON text
//! columns; rows are decoded into the shared [`Order`] model here.

use super::{RepoError, RepoResult};
use shared::models::{Order, OrderFilter, OrderUpdate};
use sqlx::SqlitePool;

const ORDER_SELECT: &str = "SELECT id, order_number, customer_id, items, total_amount, status, payment_status, payment_method, shipping_address, notes, created_at, updated_at FROM customer_order";

/// Raw row as stored; JSON/enum columns are decoded in [`OrderRow::into_order`]
#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    order_number: String,
    customer_id: i64,
    items: String,
    total_amount: f64,
    status: String,
    payment_status: String,
    payment_method: Option<String>,
    shipping_address: Option<String>,
    notes: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl OrderRow {
    fn into_order(self) -> RepoResult<Order> {
        let items = serde_json::from_str(&self.items)
            .map_err(|e| RepoError::Database(format!("Corrupt items column: {e}")))?;
        let shipping_address = self
            .shipping_address
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(|e| RepoError::Database(format!("Corrupt shipping_address column: {e}")))?;
        Ok(Order {
            id: self.id,
            order_number: self.order_number,
            customer_id: self.customer_id,
            items,
            total_amount: self.total_amount,
            status: self.status.parse().map_err(RepoError::Database)?,
            payment_status: self.payment_status.parse().map_err(RepoError::Database)?,
            payment_method: self
                .payment_method
                .as_deref()
                .map(str::parse)
                .transpose()
                .map_err(RepoError::Database)?,
            shipping_address,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn items_json(items: &[shared::models::LineItem]) -> RepoResult<String> {
    serde_json::to_string(items)
        .map_err(|e| RepoError::Validation(format!("Unserializable items: {e}")))
}

fn address_json(address: &shared::models::ShippingAddress) -> RepoResult<String> {
    serde_json::to_string(address)
        .map_err(|e| RepoError::Validation(format!("Unserializable shipping address: {e}")))
}

pub async fn find_all(pool: &SqlitePool, filter: &OrderFilter) -> RepoResult<Vec<Order>> {
    let mut sql = format!("{ORDER_SELECT} WHERE 1 = 1");
    if filter.status.is_some() {
        sql.push_str(" AND status = ?");
    }
    if filter.payment_status.is_some() {
        sql.push_str(" AND payment_status = ?");
    }
    if filter.customer_id.is_some() {
        sql.push_str(" AND customer_id = ?");
    }
    sql.push_str(" ORDER BY created_at DESC");

    let mut query = sqlx::query_as::<_, OrderRow>(&sql);
    if let Some(status) = filter.status {
        query = query.bind(status.as_str());
    }
    if let Some(payment_status) = filter.payment_status {
        query = query.bind(payment_status.as_str());
    }
    if let Some(customer_id) = filter.customer_id {
        query = query.bind(customer_id);
    }

    let rows = query.fetch_all(pool).await?;
    rows.into_iter().map(OrderRow::into_order).collect()
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Order>> {
    let sql = format!("{ORDER_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, OrderRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.map(OrderRow::into_order).transpose()
}

/// Existence re-check used by the allocator's collision guard
pub async fn number_exists(pool: &SqlitePool, order_number: &str) -> RepoResult<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM customer_order WHERE order_number = ?")
            .bind(order_number)
            .fetch_one(pool)
            .await?;
    Ok(count > 0)
}

pub async fn insert(pool: &SqlitePool, order: &Order) -> RepoResult<()> {
    let items = items_json(&order.items)?;
    let address = order
        .shipping_address
        .as_ref()
        .map(address_json)
        .transpose()?;
    sqlx::query(
        "INSERT INTO customer_order (id, order_number, customer_id, items, total_amount, status, payment_status, payment_method, shipping_address, notes, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(order.id)
    .bind(&order.order_number)
    .bind(order.customer_id)
    .bind(items)
    .bind(order.total_amount)
    .bind(order.status.as_str())
    .bind(order.payment_status.as_str())
    .bind(order.payment_method.map(|m| m.as_str()))
    .bind(address)
    .bind(&order.notes)
    .bind(order.created_at)
    .bind(order.updated_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// Apply a patch. `order_number` is never in the SET list (immutable);
/// `total_amount` is only written via `total`, the value recomputed by
/// the lifecycle manager when the patch touched `items`.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: &OrderUpdate,
    total: Option<f64>,
) -> RepoResult<Order> {
    let items = data.items.as_deref().map(items_json).transpose()?;
    let address = data
        .shipping_address
        .as_ref()
        .map(address_json)
        .transpose()?;
    let now = shared::util::now_millis();

    let rows = sqlx::query(
        "UPDATE customer_order SET customer_id = COALESCE(?1, customer_id), items = COALESCE(?2, items), total_amount = COALESCE(?3, total_amount), status = COALESCE(?4, status), payment_status = COALESCE(?5, payment_status), payment_method = COALESCE(?6, payment_method), shipping_address = COALESCE(?7, shipping_address), notes = COALESCE(?8, notes), updated_at = ?9 WHERE id = ?10",
    )
    .bind(data.customer_id)
    .bind(items)
    .bind(total)
    .bind(data.status.map(|s| s.as_str()))
    .bind(data.payment_status.map(|s| s.as_str()))
    .bind(data.payment_method.map(|m| m.as_str()))
    .bind(address)
    .bind(&data.notes)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Order {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM customer_order WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
