//! Deleting an allocation is semantically equivalent to setting its amount
//! to zero (§3); implemented as a literal row delete since `Available` is
//! derived and treats a missing row identically to an amount-0 row.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;

pub async fn delete_allocation(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM allocations WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found(format!("allocation {id} not found")));
    }

    log::info!("deleted allocation {id}");

    Ok(())
}
