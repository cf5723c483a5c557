//! Internal accessor used by the transaction and allocation engines, which
//! need `payment_for_account_id` and `deleted_at` — fields the public
//! `Category` DTO omits.

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::categories::DbCategory;
use crate::errors::AppError;

pub async fn find_category_row(pool: &PgPool, id: Uuid) -> Result<DbCategory, AppError> {
    sqlx::query_as::<_, DbCategory>(
        r#"
        SELECT id, name, description, color, payment_for_account_id, group_id, deleted_at, created_at, updated_at
        FROM categories WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::not_found(format!("category {id} not found")))
}
