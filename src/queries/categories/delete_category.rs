//! Deletes a category. Soft-deletes if any historical transaction or
//! allocation references it (to avoid losing history); hard-deletes
//! otherwise. Payment categories can never be deleted directly — only as a
//! side effect of deleting their credit account.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::categories::find_category_row::find_category_row;

pub async fn delete_category(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let existing = find_category_row(pool, id).await?;
    if existing.payment_for_account_id.is_some() {
        return Err(AppError::invalid_input(format!(
            "category {id} is a payment category; delete its account instead"
        )));
    }

    let (referenced,): (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM transactions WHERE category_id = $1
            UNION ALL
            SELECT 1 FROM allocations WHERE category_id = $1
        )
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await?;

    if referenced {
        sqlx::query("UPDATE categories SET deleted_at = now(), updated_at = now() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        log::info!("soft-deleted category {id} (referenced by history)");
    } else {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("category {id} not found")));
        }
        log::info!("hard-deleted category {id}");
    }

    Ok(())
}
