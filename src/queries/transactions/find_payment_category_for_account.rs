use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::errors::AppError;

/// Finds the payment category id for a credit account, if it has one (it
/// always should, by invariant 2, for as long as the account exists).
pub async fn find_payment_category_for_account(
    tx: &mut Transaction<'_, Postgres>,
    account_id: Uuid,
) -> Result<Option<Uuid>, AppError> {
    let row: Option<(Uuid,)> =
        sqlx::query_as("SELECT id FROM categories WHERE payment_for_account_id = $1")
            .bind(account_id)
            .fetch_optional(&mut **tx)
            .await?;

    Ok(row.map(|(id,)| id))
}
