use sqlx::PgPool;

use crate::db::allocations::{Allocation, DbAllocation};
use crate::domain::period::validate_period;
use crate::errors::AppError;

pub async fn list_allocations(pool: &PgPool, period: Option<&str>) -> Result<Vec<Allocation>, AppError> {
    let rows = if let Some(period) = period {
        validate_period(period)?;
        sqlx::query_as::<_, DbAllocation>(
            "SELECT id, category_id, period, amount, notes, created_at, updated_at FROM allocations WHERE period = $1 ORDER BY category_id",
        )
        .bind(period)
        .fetch_all(pool)
        .await?
    } else {
        sqlx::query_as::<_, DbAllocation>(
            "SELECT id, category_id, period, amount, notes, created_at, updated_at FROM allocations ORDER BY period DESC, category_id",
        )
        .fetch_all(pool)
        .await?
    };

    Ok(rows.into_iter().map(Allocation::from).collect())
}
