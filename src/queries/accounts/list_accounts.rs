use sqlx::PgPool;

use crate::db::accounts::{Account, DbAccount};
use crate::errors::AppError;

pub async fn list_accounts(pool: &PgPool) -> Result<Vec<Account>, AppError> {
    let rows = sqlx::query_as::<_, DbAccount>(
        "SELECT id, name, balance, type, created_at, updated_at FROM accounts ORDER BY created_at ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Account::from).collect())
}
