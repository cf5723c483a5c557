//! Deletes a group. The reserved group cannot be deleted. Categories in the
//! deleted group are not deleted — their `group_id` is cleared.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::category_groups::get_group::get_group;

pub async fn delete_group(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let existing = get_group(pool, id).await?;
    if existing.is_reserved {
        return Err(AppError::invalid_input(
            "the Credit Card Payments group cannot be deleted",
        ));
    }

    let mut tx = pool.begin().await?;

    sqlx::query("UPDATE categories SET group_id = NULL, updated_at = now() WHERE group_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM category_groups WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    log::info!("deleted category group {id}");

    Ok(())
}
