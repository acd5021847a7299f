//! Sequence Allocator
//!
//! Produces the next unique human-readable order number. The happy
//! path is the atomic counter (`ORD` + 6-digit zero-padded value); if
//! the candidate is already taken — stale counter after a restore,
//! out-of-band insert — a timestamp-derived number is used instead.
//! That trades strict sequentiality for guaranteed uniqueness; the
//! UNIQUE constraint on the column remains the final authority.

use crate::db::repository::{RepoResult, order, sequence};
use sqlx::SqlitePool;

const PREFIX: &str = "ORD";

/// Allocate the next order number. Any repository failure aborts
/// allocation; the caller must not persist a partially-numbered order.
pub async fn allocate(pool: &SqlitePool) -> RepoResult<String> {
    let next = sequence::next_value(pool).await?;
    let candidate = format!("{PREFIX}{next:06}");

    if order::number_exists(pool, &candidate).await? {
        let fallback = format!("{PREFIX}{}", shared::util::now_millis());
        tracing::warn!(
            candidate = %candidate,
            fallback = %fallback,
            "Order number already taken, falling back to timestamp id"
        );
        return Ok(fallback);
    }

    Ok(candidate)
}
