use sqlx::PgPool;
use uuid::Uuid;

use crate::db::categories::{Category, DbCategory};
use crate::errors::AppError;

pub async fn list_categories_by_group(pool: &PgPool, group_id: Uuid) -> Result<Vec<Category>, AppError> {
    let rows = sqlx::query_as::<_, DbCategory>(
        r#"
        SELECT id, name, description, color, payment_for_account_id, group_id, deleted_at, created_at, updated_at
        FROM categories WHERE group_id = $1 AND deleted_at IS NULL ORDER BY name ASC
        "#,
    )
    .bind(group_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Category::from).collect())
}
