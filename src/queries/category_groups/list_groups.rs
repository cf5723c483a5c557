use sqlx::PgPool;

use crate::db::category_groups::{CategoryGroup, DbCategoryGroup};
use crate::errors::AppError;

pub async fn list_groups(pool: &PgPool) -> Result<Vec<CategoryGroup>, AppError> {
    let rows = sqlx::query_as::<_, DbCategoryGroup>(
        "SELECT id, name, description, display_order, is_reserved, created_at, updated_at FROM category_groups ORDER BY display_order ASC, name ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(CategoryGroup::from).collect())
}
