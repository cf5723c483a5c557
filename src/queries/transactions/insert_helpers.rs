//! Internal row-insertion logic shared by `create_normal`, `create_transfer`
//! and `update_transaction`. Pulled out so `update` can reverse an old
//! transaction and apply new fields "as if creating fresh" inside the same
//! persistence transaction, without re-locking accounts it has already
//! locked.

use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::db::accounts::{AccountType, DbAccount};
use crate::db::transactions::DbTransaction;
use crate::errors::AppError;
use crate::queries::categories::find_category_row::find_category_row;
use crate::queries::transactions::adjust_balance::adjust_balance;
use crate::queries::transactions::find_payment_category_for_account::find_payment_category_for_account;

/// Validates and inserts a single-leg transaction row, applying its balance
/// effect. Caller must already hold the account's row lock.
pub async fn insert_normal_row(
    pool: &PgPool,
    tx: &mut Transaction<'_, Postgres>,
    account_id: Uuid,
    category_id: Option<Uuid>,
    amount: i64,
    description: &str,
    date: NaiveDate,
) -> Result<DbTransaction, AppError> {
    if amount == 0 {
        return Err(AppError::invalid_input("transaction amount must not be zero"));
    }

    if amount < 0 {
        let category_id =
            category_id.ok_or_else(|| AppError::invalid_input("an outflow requires a category"))?;
        let category = find_category_row(pool, category_id).await?;
        if category.is_payment_category_row() {
            return Err(AppError::invalid_input(
                "transactions cannot be categorized to a payment category directly",
            ));
        }
    } else if let Some(category_id) = category_id {
        let category = find_category_row(pool, category_id).await?;
        if category.is_payment_category_row() {
            return Err(AppError::invalid_input(
                "transactions cannot be categorized to a payment category directly",
            ));
        }
    }

    let row = sqlx::query_as::<_, DbTransaction>(
        r#"
        INSERT INTO transactions (type, account_id, category_id, amount, description, date)
        VALUES ('normal', $1, $2, $3, $4, $5)
        RETURNING id, type, account_id, transfer_to_account_id, category_id, amount, description, date, fitid, created_at, updated_at
        "#,
    )
    .bind(account_id)
    .bind(category_id)
    .bind(amount)
    .bind(description)
    .bind(date)
    .fetch_one(&mut **tx)
    .await?;

    adjust_balance(tx, account_id, amount).await?;

    Ok(row)
}

/// Inserts both legs of a transfer, applying the categorisation policy for
/// transfers into a credit account (§4.4, §9) and both balance effects.
/// Caller must already hold both accounts' row locks, acquired in ascending
/// `id` order.
pub async fn insert_transfer_pair(
    tx: &mut Transaction<'_, Postgres>,
    from_account: &DbAccount,
    to_account: &DbAccount,
    amount: i64,
    description: &str,
    date: NaiveDate,
) -> Result<(DbTransaction, DbTransaction), AppError> {
    if from_account.id == to_account.id {
        return Err(AppError::invalid_input("cannot transfer an account to itself"));
    }
    if amount <= 0 {
        return Err(AppError::invalid_input("transfer amount must be positive"));
    }

    let to_category_id = if to_account.r#type == AccountType::Credit.as_str() {
        find_payment_category_for_account(tx, to_account.id).await?
    } else {
        None
    };

    let from_leg = sqlx::query_as::<_, DbTransaction>(
        r#"
        INSERT INTO transactions (type, account_id, transfer_to_account_id, amount, description, date)
        VALUES ('transfer', $1, $2, $3, $4, $5)
        RETURNING id, type, account_id, transfer_to_account_id, category_id, amount, description, date, fitid, created_at, updated_at
        "#,
    )
    .bind(from_account.id)
    .bind(to_account.id)
    .bind(-amount)
    .bind(description)
    .bind(date)
    .fetch_one(&mut **tx)
    .await?;

    let to_leg = sqlx::query_as::<_, DbTransaction>(
        r#"
        INSERT INTO transactions (type, account_id, transfer_to_account_id, category_id, amount, description, date)
        VALUES ('transfer', $1, $2, $3, $4, $5, $6)
        RETURNING id, type, account_id, transfer_to_account_id, category_id, amount, description, date, fitid, created_at, updated_at
        "#,
    )
    .bind(to_account.id)
    .bind(from_account.id)
    .bind(to_category_id)
    .bind(amount)
    .bind(description)
    .bind(date)
    .fetch_one(&mut *tx)
    .await?;

    adjust_balance(tx, from_account.id, -amount).await?;
    adjust_balance(tx, to_account.id, amount).await?;

    Ok((from_leg, to_leg))
}
