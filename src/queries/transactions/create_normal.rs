//! Creates a single-leg ("normal") transaction and applies its balance
//! effect atomically.
//!
//! Credit-card spending coupling (§4.4): when the account is `credit` and
//! `amount < 0`, no extra row is written. The payment category's Available
//! is derived live from the sum of outflows on the account in that month —
//! see `queries::allocations::spend_this_month`.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::transactions::Transaction as TransactionDto;
use crate::errors::AppError;
use crate::queries::transactions::insert_helpers::insert_normal_row;
use crate::queries::transactions::lock_accounts::lock_account;

#[tracing::instrument(skip(pool))]
pub async fn create_normal(
    pool: &PgPool,
    account_id: Uuid,
    category_id: Option<Uuid>,
    amount: i64,
    description: &str,
    date: NaiveDate,
) -> Result<TransactionDto, AppError> {
    let mut tx = pool.begin().await?;

    lock_account(&mut tx, account_id).await?;

    let row = insert_normal_row(pool, &mut tx, account_id, category_id, amount, description, date).await?;

    tx.commit().await?;

    log::info!("created transaction {} on account {account_id} ({amount} cents)", row.id);

    Ok(row.into())
}
