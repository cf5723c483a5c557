use sqlx::PgPool;
use uuid::Uuid;

use crate::db::accounts::{Account, DbAccount};
use crate::errors::AppError;

pub async fn get_account(pool: &PgPool, id: Uuid) -> Result<Account, AppError> {
    let row = sqlx::query_as::<_, DbAccount>(
        "SELECT id, name, balance, type, created_at, updated_at FROM accounts WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::not_found(format!("account {id} not found")))?;

    Ok(row.into())
}
