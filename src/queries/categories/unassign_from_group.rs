//! Clears a category's group. Payment categories may not be unassigned from
//! the reserved group — they live there for the lifetime of their account.

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::categories::{Category, DbCategory};
use crate::errors::AppError;
use crate::queries::categories::find_category_row::find_category_row;

pub async fn unassign_from_group(pool: &PgPool, category_id: Uuid) -> Result<Category, AppError> {
    let existing = find_category_row(pool, category_id).await?;
    if existing.payment_for_account_id.is_some() {
        return Err(AppError::invalid_input(format!(
            "category {category_id} is a payment category and cannot leave its group"
        )));
    }

    let row = sqlx::query_as::<_, DbCategory>(
        r#"
        UPDATE categories SET group_id = NULL, updated_at = now()
        WHERE id = $1
        RETURNING id, name, description, color, payment_for_account_id, group_id, deleted_at, created_at, updated_at
        "#,
    )
    .bind(category_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::not_found(format!("category {category_id} not found")))?;

    Ok(row.into())
}
