//! Renames/recolors a category. Payment categories reject this outright:
//! they shadow the lifecycle of their credit account and are never
//! user-editable.

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::categories::{Category, DbCategory};
use crate::errors::AppError;
use crate::queries::categories::find_category_row::find_category_row;

pub async fn update_category(
    pool: &PgPool,
    id: Uuid,
    name: &str,
    description: Option<&str>,
    color: Option<&str>,
) -> Result<Category, AppError> {
    let existing = find_category_row(pool, id).await?;
    if existing.payment_for_account_id.is_some() {
        return Err(AppError::invalid_input(format!(
            "category {id} is a payment category and cannot be edited directly"
        )));
    }
    if name.trim().is_empty() {
        return Err(AppError::invalid_input("category name must not be empty"));
    }

    let row = sqlx::query_as::<_, DbCategory>(
        r#"
        UPDATE categories SET name = $1, description = $2, color = $3, updated_at = now()
        WHERE id = $4
        RETURNING id, name, description, color, payment_for_account_id, group_id, deleted_at, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(color)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::not_found(format!("category {id} not found")))?;

    log::info!("updated category {id}");

    Ok(row.into())
}
