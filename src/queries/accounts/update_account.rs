//! Renames an account. `balance` and `type` are not editable here: balance
//! is authoritative and only ever adjusted by the transaction engine, and
//! changing `type` after creation would strand or duplicate the payment
//! category coupling.

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::accounts::{Account, DbAccount};
use crate::errors::AppError;

pub async fn update_account(pool: &PgPool, id: Uuid, name: &str) -> Result<Account, AppError> {
    if name.trim().is_empty() {
        return Err(AppError::invalid_input("account name must not be empty"));
    }

    let row = sqlx::query_as::<_, DbAccount>(
        r#"
        UPDATE accounts SET name = $1, updated_at = now()
        WHERE id = $2
        RETURNING id, name, balance, type, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::not_found(format!("account {id} not found")))?;

    log::info!("renamed account {id}");

    Ok(row.into())
}
