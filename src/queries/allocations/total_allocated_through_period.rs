//! Σ(Allocated(cat, M) over all categories and all M ≤ P) — the second
//! term of `RTA(P)`.

use sqlx::PgPool;

use crate::domain::period::validate_period;
use crate::errors::AppError;

pub async fn total_allocated_through_period(pool: &PgPool, period: &str) -> Result<i64, AppError> {
    validate_period(period)?;

    let (total,): (Option<i64>,) =
        sqlx::query_as("SELECT SUM(amount) FROM allocations WHERE period <= $1")
            .bind(period)
            .fetch_one(pool)
            .await?;

    Ok(total.unwrap_or(0))
}
