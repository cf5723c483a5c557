use sqlx::PgPool;

use crate::errors::AppError;

/// Σ(account.balance over all accounts, signed) — the first term of RTA.
pub async fn total_balance(pool: &PgPool) -> Result<i64, AppError> {
    let (total,): (Option<i64>,) =
        sqlx::query_as("SELECT SUM(balance) FROM accounts").fetch_one(pool).await?;

    Ok(total.unwrap_or(0))
}
