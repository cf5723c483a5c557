use sqlx::PgPool;

use crate::db::categories::{Category, DbCategory};
use crate::errors::AppError;

/// Lists categories. Soft-deleted categories are excluded unless
/// `include_deleted` is set (used by history-facing views).
pub async fn list_categories(pool: &PgPool, include_deleted: bool) -> Result<Vec<Category>, AppError> {
    let rows = if include_deleted {
        sqlx::query_as::<_, DbCategory>(
            r#"
            SELECT id, name, description, color, payment_for_account_id, group_id, deleted_at, created_at, updated_at
            FROM categories ORDER BY name ASC
            "#,
        )
        .fetch_all(pool)
        .await?
    } else {
        sqlx::query_as::<_, DbCategory>(
            r#"
            SELECT id, name, description, color, payment_for_account_id, group_id, deleted_at, created_at, updated_at
            FROM categories WHERE deleted_at IS NULL ORDER BY name ASC
            "#,
        )
        .fetch_all(pool)
        .await?
    };

    Ok(rows.into_iter().map(Category::from).collect())
}
