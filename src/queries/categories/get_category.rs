use sqlx::PgPool;
use uuid::Uuid;

use crate::db::categories::{Category, DbCategory};
use crate::errors::AppError;

pub async fn get_category(pool: &PgPool, id: Uuid) -> Result<Category, AppError> {
    let row = sqlx::query_as::<_, DbCategory>(
        r#"
        SELECT id, name, description, color, payment_for_account_id, group_id, deleted_at, created_at, updated_at
        FROM categories WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::not_found(format!("category {id} not found")))?;

    Ok(row.into())
}
