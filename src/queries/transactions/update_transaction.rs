//! Updates a transaction: reverses the prior balance effect (and, for a
//! transfer, the sibling's), then applies the new fields as if creating
//! fresh (§4.4). If `type` changes between `normal` and `transfer`, the
//! sibling is created or deleted accordingly — this falls out naturally
//! from "reverse old, insert new" rather than needing its own branch.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::transactions::{DbTransaction, Transaction as TransactionDto, TransactionType};
use crate::errors::AppError;
use crate::queries::transactions::adjust_balance::adjust_balance;
use crate::queries::transactions::find_transfer_sibling::find_transfer_sibling;
use crate::queries::transactions::insert_helpers::{insert_normal_row, insert_transfer_pair};
use crate::queries::transactions::lock_accounts::lock_account;

pub enum NewTransactionFields {
    Normal {
        account_id: Uuid,
        category_id: Option<Uuid>,
        amount: i64,
        description: String,
        date: NaiveDate,
    },
    Transfer {
        from: Uuid,
        to: Uuid,
        amount: i64,
        description: String,
        date: NaiveDate,
    },
}

pub enum UpdateOutcome {
    Normal(TransactionDto),
    Transfer(TransactionDto, TransactionDto),
}

#[tracing::instrument(skip(pool, fields))]
pub async fn update_transaction(
    pool: &PgPool,
    id: Uuid,
    fields: NewTransactionFields,
) -> Result<UpdateOutcome, AppError> {
    let mut tx = pool.begin().await?;

    let existing = sqlx::query_as::<_, DbTransaction>(
        r#"
        SELECT id, type, account_id, transfer_to_account_id, category_id, amount, description, date, fitid, created_at, updated_at
        FROM transactions WHERE id = $1 FOR UPDATE
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| AppError::not_found(format!("transaction {id} not found")))?;

    let mut touched: BTreeSet<Uuid> = BTreeSet::new();
    touched.insert(existing.account_id);
    if let Some(peer) = existing.transfer_to_account_id {
        touched.insert(peer);
    }
    match &fields {
        NewTransactionFields::Normal { account_id, .. } => {
            touched.insert(*account_id);
        }
        NewTransactionFields::Transfer { from, to, .. } => {
            touched.insert(*from);
            touched.insert(*to);
        }
    }

    let mut locked = HashMap::new();
    for account_id in touched {
        let account = lock_account(&mut tx, account_id).await?;
        locked.insert(account_id, account);
    }

    match TransactionType::from_str(&existing.r#type) {
        Some(TransactionType::Transfer) => {
            let sibling = find_transfer_sibling(&mut tx, &existing).await?;

            sqlx::query("DELETE FROM transactions WHERE id = $1")
                .bind(existing.id)
                .execute(&mut *tx)
                .await?;
            sqlx::query("DELETE FROM transactions WHERE id = $1")
                .bind(sibling.id)
                .execute(&mut *tx)
                .await?;

            adjust_balance(&mut tx, existing.account_id, -existing.amount).await?;
            adjust_balance(&mut tx, sibling.account_id, -sibling.amount).await?;
        }
        _ => {
            sqlx::query("DELETE FROM transactions WHERE id = $1")
                .bind(existing.id)
                .execute(&mut *tx)
                .await?;

            adjust_balance(&mut tx, existing.account_id, -existing.amount).await?;
        }
    }

    let outcome = match fields {
        NewTransactionFields::Normal { account_id, category_id, amount, description, date } => {
            let row =
                insert_normal_row(pool, &mut tx, account_id, category_id, amount, &description, date).await?;
            UpdateOutcome::Normal(row.into())
        }
        NewTransactionFields::Transfer { from, to, amount, description, date } => {
            let from_account = locked
                .get(&from)
                .cloned()
                .ok_or_else(|| AppError::Internal(anyhow::anyhow!("account {from} not locked")))?;
            let to_account = locked
                .get(&to)
                .cloned()
                .ok_or_else(|| AppError::Internal(anyhow::anyhow!("account {to} not locked")))?;

            let (from_leg, to_leg) =
                insert_transfer_pair(&mut tx, &from_account, &to_account, amount, &description, date).await?;
            UpdateOutcome::Transfer(from_leg.into(), to_leg.into())
        }
    };

    tx.commit().await?;

    log::info!("updated transaction {id}");

    Ok(outcome)
}
