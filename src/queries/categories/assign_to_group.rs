//! Moves a category into a group. The reserved "Credit Card Payments" group
//! may only ever hold payment categories — user categories are rejected.

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::categories::{Category, DbCategory};
use crate::db::category_groups::RESERVED_GROUP_ID;
use crate::errors::AppError;
use crate::queries::categories::find_category_row::find_category_row;

pub async fn assign_to_group(pool: &PgPool, category_id: Uuid, group_id: Uuid) -> Result<Category, AppError> {
    let existing = find_category_row(pool, category_id).await?;

    if group_id == RESERVED_GROUP_ID && existing.payment_for_account_id.is_none() {
        return Err(AppError::invalid_input(
            "only payment categories may be assigned to the Credit Card Payments group",
        ));
    }

    let row = sqlx::query_as::<_, DbCategory>(
        r#"
        UPDATE categories SET group_id = $1, updated_at = now()
        WHERE id = $2
        RETURNING id, name, description, color, payment_for_account_id, group_id, deleted_at, created_at, updated_at
        "#,
    )
    .bind(group_id)
    .bind(category_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::not_found(format!("category {category_id} not found")))?;

    Ok(row.into())
}
