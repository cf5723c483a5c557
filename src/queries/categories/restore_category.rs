//! Reverses a soft delete.

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::categories::{Category, DbCategory};
use crate::errors::AppError;

pub async fn restore_category(pool: &PgPool, id: Uuid) -> Result<Category, AppError> {
    let row = sqlx::query_as::<_, DbCategory>(
        r#"
        UPDATE categories SET deleted_at = NULL, updated_at = now()
        WHERE id = $1 AND deleted_at IS NOT NULL
        RETURNING id, name, description, color, payment_for_account_id, group_id, deleted_at, created_at, updated_at
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::not_found(format!("category {id} not found or not deleted")))?;

    log::info!("restored category {id}");

    Ok(row.into())
}
