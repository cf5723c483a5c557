//! Create an account, auto-provisioning a payment category for credit
//! accounts in the same transaction.

use sqlx::PgPool;

use crate::db::accounts::{Account, AccountType, DbAccount};
use crate::errors::AppError;
use crate::queries::categories::create_payment_category::create_payment_category;

#[tracing::instrument(skip(pool))]
pub async fn create_account(
    pool: &PgPool,
    name: &str,
    initial_balance: i64,
    account_type: AccountType,
) -> Result<Account, AppError> {
    if name.trim().is_empty() {
        return Err(AppError::invalid_input("account name must not be empty"));
    }

    let mut tx = pool.begin().await?;

    let row = sqlx::query_as::<_, DbAccount>(
        r#"
        INSERT INTO accounts (name, balance, type)
        VALUES ($1, $2, $3)
        RETURNING id, name, balance, type, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(initial_balance)
    .bind(account_type.as_str())
    .fetch_one(&mut *tx)
    .await?;

    if account_type.is_credit() {
        create_payment_category(&mut tx, row.id, name).await?;
        log::info!("created payment category for new credit account {}", row.id);
    }

    tx.commit().await?;

    log::info!("created account {} ({})", row.id, account_type.as_str());

    Ok(row.into())
}
