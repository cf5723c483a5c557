//! Row-locking helpers shared by every transaction mutation.
//!
//! Two transfers that each touch the same pair of accounts must not
//! deadlock, so every multi-account operation locks in ascending `id` order
//! rather than request order.

use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::db::accounts::DbAccount;
use crate::errors::AppError;

async fn lock_one(tx: &mut Transaction<'_, Postgres>, id: Uuid) -> Result<DbAccount, AppError> {
    sqlx::query_as::<_, DbAccount>(
        "SELECT id, name, balance, type, created_at, updated_at FROM accounts WHERE id = $1 FOR UPDATE",
    )
    .bind(id)
    .fetch_optional(&mut **tx)
    .await?
    .ok_or_else(|| AppError::not_found(format!("account {id} not found")))
}

/// Locks a single account row for update.
pub async fn lock_account(tx: &mut Transaction<'_, Postgres>, id: Uuid) -> Result<DbAccount, AppError> {
    lock_one(tx, id).await
}

/// Locks two account rows in ascending `id` order, returning them in the
/// order requested (not lock order).
pub async fn lock_two_accounts(
    tx: &mut Transaction<'_, Postgres>,
    a: Uuid,
    b: Uuid,
) -> Result<(DbAccount, DbAccount), AppError> {
    if a == b {
        let row = lock_one(tx, a).await?;
        return Ok((row.clone(), row));
    }

    if a < b {
        let first = lock_one(tx, a).await?;
        let second = lock_one(tx, b).await?;
        Ok((first, second))
    } else {
        let second = lock_one(tx, b).await?;
        let first = lock_one(tx, a).await?;
        Ok((first, second))
    }
}
