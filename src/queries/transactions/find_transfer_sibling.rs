//! Locates the conjugate row of a transfer leg.
//!
//! The schema carries no explicit pair id (§9 design choice: two rows linked
//! only by `transfer_to_account_id`, signed amount, date and description).
//! The sibling of a leg on account `A` pointing at account `B` is the row on
//! `B` pointing back at `A` with the opposite-signed amount and the same
//! date and description. If more than one row matches (e.g. two transfers
//! between the same pair of accounts on the same day with the same
//! description), any one of them is a valid sibling — the invariant only
//! requires that some matching row exists, not which one.

use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::db::transactions::DbTransaction;
use crate::errors::AppError;

pub async fn find_transfer_sibling(
    tx: &mut Transaction<'_, Postgres>,
    leg: &DbTransaction,
) -> Result<DbTransaction, AppError> {
    let peer_account = leg.transfer_to_account_id.ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!("transaction {} is not a transfer leg", leg.id))
    })?;

    sqlx::query_as::<_, DbTransaction>(
        r#"
        SELECT id, type, account_id, transfer_to_account_id, category_id, amount, description, date, fitid, created_at, updated_at
        FROM transactions
        WHERE id <> $1
          AND account_id = $2
          AND transfer_to_account_id = $3
          AND amount = $4
          AND date = $5
          AND description = $6
        LIMIT 1
        "#,
    )
    .bind(leg.id)
    .bind(peer_account)
    .bind(leg.account_id)
    .bind(-leg.amount)
    .bind(leg.date)
    .bind(&leg.description)
    .fetch_optional(&mut **tx)
    .await?
    .ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!(
            "transfer leg {} has no matching sibling on account {}",
            leg.id,
            peer_account
        ))
    })
}
