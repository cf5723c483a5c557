use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::errors::AppError;

/// Adds `delta` (positive or negative) to an account's balance. Caller is
/// expected to already hold the row lock (via `lock_accounts`).
pub async fn adjust_balance(tx: &mut Transaction<'_, Postgres>, account_id: Uuid, delta: i64) -> Result<(), AppError> {
    sqlx::query("UPDATE accounts SET balance = balance + $1, updated_at = now() WHERE id = $2")
        .bind(delta)
        .bind(account_id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
