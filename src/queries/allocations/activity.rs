//! `Activity(category, P)` — net signed transactional movement in a
//! category over a calendar month.

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::period::period_bounds;
use crate::errors::AppError;

pub async fn activity(pool: &PgPool, category_id: Uuid, period: &str) -> Result<i64, AppError> {
    let (start, end) = period_bounds(period)?;

    let (total,): (Option<i64>,) = sqlx::query_as(
        "SELECT SUM(amount) FROM transactions WHERE category_id = $1 AND date >= $2 AND date < $3",
    )
    .bind(category_id)
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await?;

    Ok(total.unwrap_or(0))
}

/// Cumulative activity from the category's beginning through the end of
/// `P` — the activity half of the Available formula (§4.5).
pub async fn cumulative_activity_through(pool: &PgPool, category_id: Uuid, period: &str) -> Result<i64, AppError> {
    let (_, end) = period_bounds(period)?;

    let (total,): (Option<i64>,) =
        sqlx::query_as("SELECT SUM(amount) FROM transactions WHERE category_id = $1 AND date < $2")
            .bind(category_id)
            .bind(end)
            .fetch_one(pool)
            .await?;

    Ok(total.unwrap_or(0))
}
