use sqlx::PgPool;
use uuid::Uuid;

use crate::db::allocations::{Allocation, DbAllocation};
use crate::errors::AppError;

pub async fn get_allocation(pool: &PgPool, id: Uuid) -> Result<Allocation, AppError> {
    let row = sqlx::query_as::<_, DbAllocation>(
        "SELECT id, category_id, period, amount, notes, created_at, updated_at FROM allocations WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::not_found(format!("allocation {id} not found")))?;

    Ok(row.into())
}
