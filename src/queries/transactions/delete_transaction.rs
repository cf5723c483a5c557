//! Deletes a transaction, reversing its balance effect. Deleting one leg of
//! a transfer always deletes both (§4.4).

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::transactions::DbTransaction;
use crate::db::transactions::TransactionType;
use crate::errors::AppError;
use crate::queries::transactions::adjust_balance::adjust_balance;
use crate::queries::transactions::find_transfer_sibling::find_transfer_sibling;
use crate::queries::transactions::lock_accounts::{lock_account, lock_two_accounts};

pub async fn delete_transaction(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
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

    match TransactionType::from_str(&existing.r#type) {
        Some(TransactionType::Transfer) => {
            let peer_account_id = existing
                .transfer_to_account_id
                .ok_or_else(|| AppError::Internal(anyhow::anyhow!("transfer leg {id} missing peer account")))?;

            lock_two_accounts(&mut tx, existing.account_id, peer_account_id).await?;

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

            log::info!("deleted transfer {} / {} (peers of each other)", existing.id, sibling.id);
        }
        _ => {
            lock_account(&mut tx, existing.account_id).await?;

            sqlx::query("DELETE FROM transactions WHERE id = $1")
                .bind(existing.id)
                .execute(&mut *tx)
                .await?;

            adjust_balance(&mut tx, existing.account_id, -existing.amount).await?;

            log::info!("deleted transaction {id}");
        }
    }

    tx.commit().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sqlx::PgPool;

    use crate::db::accounts::AccountType;
    use crate::queries::accounts::create_account::create_account;
    use crate::queries::accounts::get_account::get_account;
    use crate::queries::transactions::create_normal::create_normal;
    use crate::queries::transactions::create_transfer::create_transfer;

    /// Creating then deleting a transaction restores the account balance.
    #[sqlx::test]
    async fn delete_restores_the_account_balance(pool: PgPool) -> anyhow::Result<()> {
        let checking = create_account(&pool, "Checking", 0, AccountType::Checking).await?;
        let txn = create_normal(&pool, checking.id, None, 12_345, "misc", NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
            .await?;

        assert_eq!(get_account(&pool, checking.id).await?.balance, 12_345);

        delete_transaction(&pool, txn.id).await?;

        assert_eq!(get_account(&pool, checking.id).await?.balance, 0);

        Ok(())
    }

    /// Deleting one leg of a transfer deletes both and restores both
    /// balances (§4.4).
    #[sqlx::test]
    async fn delete_one_leg_of_a_transfer_deletes_both_and_restores_balances(pool: PgPool) -> anyhow::Result<()> {
        let a = create_account(&pool, "A", 100_000, AccountType::Checking).await?;
        let b = create_account(&pool, "B", 0, AccountType::Savings).await?;

        let transfer = create_transfer(&pool, a.id, b.id, 40_000, "move", NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
            .await?;

        assert_eq!(get_account(&pool, a.id).await?.balance, 60_000);
        assert_eq!(get_account(&pool, b.id).await?.balance, 40_000);

        delete_transaction(&pool, transfer.from_leg.id).await?;

        assert_eq!(get_account(&pool, a.id).await?.balance, 100_000);
        assert_eq!(get_account(&pool, b.id).await?.balance, 0);

        let remaining: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM transactions")
            .fetch_one(&pool)
            .await?;
        assert_eq!(remaining.0, 0);

        Ok(())
    }
}
