use sqlx::PgPool;
use uuid::Uuid;

use crate::db::transactions::{DbTransaction, Transaction as TransactionDto};
use crate::errors::AppError;

pub async fn get_transaction(pool: &PgPool, id: Uuid) -> Result<TransactionDto, AppError> {
    let row = sqlx::query_as::<_, DbTransaction>(
        r#"
        SELECT id, type, account_id, transfer_to_account_id, category_id, amount, description, date, fitid, created_at, updated_at
        FROM transactions WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::not_found(format!("transaction {id} not found")))?;

    Ok(row.into())
}
