//! Renames/reorders a group. The reserved "Credit Card Payments" group may
//! not be renamed.

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::category_groups::{CategoryGroup, DbCategoryGroup};
use crate::errors::AppError;
use crate::queries::category_groups::get_group::get_group;

pub async fn update_group(
    pool: &PgPool,
    id: Uuid,
    name: &str,
    description: Option<&str>,
    display_order: i32,
) -> Result<CategoryGroup, AppError> {
    let existing = get_group(pool, id).await?;
    if existing.is_reserved {
        return Err(AppError::invalid_input(
            "the Credit Card Payments group cannot be renamed",
        ));
    }
    if name.trim().is_empty() {
        return Err(AppError::invalid_input("group name must not be empty"));
    }

    let row = sqlx::query_as::<_, DbCategoryGroup>(
        r#"
        UPDATE category_groups SET name = $1, description = $2, display_order = $3, updated_at = now()
        WHERE id = $4
        RETURNING id, name, description, display_order, is_reserved, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(display_order)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::not_found(format!("category group {id} not found")))?;

    Ok(row.into())
}
