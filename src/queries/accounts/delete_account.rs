//! Deletes an account. Cascades (via foreign keys) to the account's own
//! transactions and — for credit accounts — the paired payment category and
//! its allocations. A transfer leg stored on a *peer* account that points at
//! this one also cascades away (its `transfer_to_account_id` FK references
//! this account), so before dropping the row we reverse that leg's balance
//! effect on the peer in the same transaction — otherwise the peer's
//! balance would stay stale once its row for this transfer disappears.

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::transactions::adjust_balance::adjust_balance;
use crate::queries::transactions::lock_accounts::lock_account;

pub async fn delete_account(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    lock_account(&mut tx, id).await?;

    let peer_legs: Vec<(Uuid, i64)> = sqlx::query_as(
        "SELECT account_id, amount FROM transactions WHERE transfer_to_account_id = $1 AND account_id <> $1",
    )
    .bind(id)
    .fetch_all(&mut *tx)
    .await?;

    let mut reversal_by_peer: HashMap<Uuid, i64> = HashMap::new();
    for (peer_account_id, amount) in peer_legs {
        *reversal_by_peer.entry(peer_account_id).or_insert(0) += amount;
    }

    let mut peer_ids: Vec<Uuid> = reversal_by_peer.keys().copied().collect();
    peer_ids.sort();

    for peer_id in peer_ids {
        lock_account(&mut tx, peer_id).await?;
        adjust_balance(&mut tx, peer_id, -reversal_by_peer[&peer_id]).await?;
    }

    sqlx::query("DELETE FROM accounts WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    log::info!("deleted account {id}");

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
    use crate::queries::allocations::upsert_allocation::upsert_allocation;
    use crate::queries::transactions::create_transfer::create_transfer;

    /// Deleting a credit account cascades to its payment category and any
    /// allocations on that category.
    #[sqlx::test]
    async fn delete_cascades_to_payment_category_and_its_allocations(pool: PgPool) -> anyhow::Result<()> {
        let cc = create_account(&pool, "CC", 0, AccountType::Credit).await?;

        let pay_cc_id: Uuid =
            sqlx::query_scalar("SELECT id FROM categories WHERE payment_for_account_id = $1")
                .bind(cc.id)
                .fetch_one(&pool)
                .await?;
        upsert_allocation(&pool, pay_cc_id, "2024-07", 1_000, None).await?;

        delete_account(&pool, cc.id).await?;

        let category_count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories WHERE id = $1")
            .bind(pay_cc_id)
            .fetch_one(&pool)
            .await?;
        assert_eq!(category_count.0, 0);

        let allocation_count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM allocations WHERE category_id = $1")
                .bind(pay_cc_id)
                .fetch_one(&pool)
                .await?;
        assert_eq!(allocation_count.0, 0);

        Ok(())
    }

    /// Regression: deleting account A, which holds one leg of a transfer
    /// with peer B, must reverse that leg's effect on B's balance — not
    /// just let the FK cascade drop B's row silently (Universal Invariant
    /// 1, §8, reachable via an ordinary transfer-then-delete sequence).
    #[sqlx::test]
    async fn delete_reverses_the_peer_balance_of_a_surviving_transfer_sibling(pool: PgPool) -> anyhow::Result<()> {
        let a = create_account(&pool, "A", 100_000, AccountType::Checking).await?;
        let b = create_account(&pool, "B", 0, AccountType::Savings).await?;

        create_transfer(&pool, a.id, b.id, 40_000, "move", NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()).await?;
        assert_eq!(get_account(&pool, b.id).await?.balance, 40_000);

        delete_account(&pool, a.id).await?;

        assert_eq!(get_account(&pool, b.id).await?.balance, 0);

        let remaining: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM transactions WHERE account_id = $1")
            .bind(b.id)
            .fetch_one(&pool)
            .await?;
        assert_eq!(remaining.0, 0);

        Ok(())
    }
}
