use sqlx::PgPool;
use uuid::Uuid;

use crate::db::category_groups::{CategoryGroup, DbCategoryGroup};
use crate::errors::AppError;

pub async fn get_group(pool: &PgPool, id: Uuid) -> Result<CategoryGroup, AppError> {
    let row = sqlx::query_as::<_, DbCategoryGroup>(
        "SELECT id, name, description, display_order, is_reserved, created_at, updated_at FROM category_groups WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::not_found(format!("category group {id} not found")))?;

    Ok(row.into())
}
