//! `Allocated(category, P)` — the amount a user has assigned to one
//! category in one period, or 0 if no allocation row exists.

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::period::validate_period;
use crate::errors::AppError;

pub async fn allocated(pool: &PgPool, category_id: Uuid, period: &str) -> Result<i64, AppError> {
    validate_period(period)?;

    let row: Option<(i64,)> =
        sqlx::query_as("SELECT amount FROM allocations WHERE category_id = $1 AND period = $2")
            .bind(category_id)
            .bind(period)
            .fetch_optional(pool)
            .await?;

    Ok(row.map(|(amount,)| amount).unwrap_or(0))
}

/// Cumulative allocated amount from the category's beginning through the
/// end of `P`. `period` strings of shape `YYYY-MM` sort lexicographically
/// in chronological order, so `period <= $1` is a valid "through" filter.
pub async fn cumulative_allocated_through(pool: &PgPool, category_id: Uuid, period: &str) -> Result<i64, AppError> {
    validate_period(period)?;

    let (total,): (Option<i64>,) =
        sqlx::query_as("SELECT SUM(amount) FROM allocations WHERE category_id = $1 AND period <= $2")
            .bind(category_id)
            .bind(period)
            .fetch_one(pool)
            .await?;

    Ok(total.unwrap_or(0))
}
