use sqlx::PgPool;

use crate::db::category_groups::{CategoryGroup, DbCategoryGroup};
use crate::errors::AppError;

pub async fn create_group(
    pool: &PgPool,
    name: &str,
    description: Option<&str>,
    display_order: i32,
) -> Result<CategoryGroup, AppError> {
    if name.trim().is_empty() {
        return Err(AppError::invalid_input("group name must not be empty"));
    }
    if name == "Credit Card Payments" {
        return Err(AppError::conflict("\"Credit Card Payments\" is a reserved group name"));
    }

    let row = sqlx::query_as::<_, DbCategoryGroup>(
        r#"
        INSERT INTO category_groups (name, description, display_order, is_reserved)
        VALUES ($1, $2, $3, false)
        RETURNING id, name, description, display_order, is_reserved, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(display_order)
    .fetch_one(pool)
    .await?;

    log::info!("created category group {}", row.id);

    Ok(row.into())
}
