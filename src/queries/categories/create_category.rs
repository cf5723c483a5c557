//! Creates a user-managed category. Payment categories are never created
//! here — see `create_payment_category`, which only `create_account` calls.

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::categories::{Category, DbCategory};
use crate::db::category_groups::RESERVED_GROUP_ID;
use crate::errors::AppError;

pub async fn create_category(
    pool: &PgPool,
    name: &str,
    description: Option<&str>,
    color: Option<&str>,
    group_id: Option<Uuid>,
) -> Result<Category, AppError> {
    if name.trim().is_empty() {
        return Err(AppError::invalid_input("category name must not be empty"));
    }

    if group_id == Some(RESERVED_GROUP_ID) {
        return Err(AppError::invalid_input(
            "the Credit Card Payments group may only hold payment categories",
        ));
    }

    let row = sqlx::query_as::<_, DbCategory>(
        r#"
        INSERT INTO categories (name, description, color, group_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, description, color, payment_for_account_id, group_id, deleted_at, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(color)
    .bind(group_id)
    .fetch_one(pool)
    .await?;

    log::info!("created category {}", row.id);

    Ok(row.into())
}
