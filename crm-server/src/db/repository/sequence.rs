//! Order Sequence Repository
//!
//! Single-row counter backing order number allocation. The counter is
//! the source of truth for the next sequential number; incrementing is
//! atomic at the database, so concurrent creates cannot read the same
//! value.

use super::RepoResult;
use sqlx::SqlitePool;

/// Atomically increment the counter and return the new value.
///
/// On first use the counter row is seeded from the highest strictly
/// sequential number already stored (`ORD` + exactly 6 digits).
/// Timestamp-fallback numbers never advance the sequence.
pub async fn next_value(pool: &SqlitePool) -> RepoResult<i64> {
    // Race-safe lazy seed: losing writers hit the conflict clause
    sqlx::query(
        "INSERT INTO order_sequence (id, value) SELECT 1, COALESCE(MAX(CAST(substr(order_number, 4) AS INTEGER)), 0) FROM customer_order WHERE order_number GLOB 'ORD[0-9][0-9][0-9][0-9][0-9][0-9]' ON CONFLICT(id) DO NOTHING",
    )
    .execute(pool)
    .await?;

    let value: i64 =
        sqlx::query_scalar("UPDATE order_sequence SET value = value + 1 WHERE id = 1 RETURNING value")
            .fetch_one(pool)
            .await?;
    Ok(value)
}
