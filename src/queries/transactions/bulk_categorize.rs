//! Assigns or clears the category on many transaction rows at once,
//! rejecting assignment to a payment category (§4.4).

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::categories::find_category_row::find_category_row;

pub async fn bulk_categorize(pool: &PgPool, ids: &[Uuid], category_id: Option<Uuid>) -> Result<u64, AppError> {
    if ids.is_empty() {
        return Err(AppError::invalid_input("no transaction ids provided"));
    }

    if let Some(category_id) = category_id {
        let category = find_category_row(pool, category_id).await?;
        if category.is_payment_category_row() {
            return Err(AppError::invalid_input(
                "transactions cannot be categorized to a payment category directly",
            ));
        }
    }

    let result = sqlx::query("UPDATE transactions SET category_id = $1, updated_at = now() WHERE id = ANY($2)")
        .bind(category_id)
        .bind(ids)
        .execute(pool)
        .await?;

    log::info!("bulk-categorized {} transactions to {:?}", result.rows_affected(), category_id);

    Ok(result.rows_affected())
}
