//! Internal accessor: every payment category paired with the credit
//! account it belongs to. Used by `total_underfunded`/`ready_to_assign` to
//! sum Underfunded across all payment categories without the caller
//! needing to know which categories are payment categories.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PaymentCategoryRow {
    pub category_id: Uuid,
    pub account_id: Uuid,
}

pub async fn list_payment_categories(pool: &PgPool) -> Result<Vec<PaymentCategoryRow>, AppError> {
    let rows = sqlx::query_as::<_, PaymentCategoryRow>(
        r#"
        SELECT id AS category_id, payment_for_account_id AS account_id
        FROM categories WHERE payment_for_account_id IS NOT NULL
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
