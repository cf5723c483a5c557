//! Creates a transfer: two conjugate transaction rows, one per account,
//! linked by `transfer_to_account_id` and carrying opposite-signed amounts,
//! the same `date` and `description` (§3 invariant 3).
//!
//! Policy for transfers into a credit account (§4.4, §9): the inbound leg on
//! a credit account is *always* categorised with that account's payment
//! category, uniformly — no conditional on whether the payment category is
//! sufficiently allocated. This keeps category-based aggregates correct
//! without a special case; the user-visible consequence (Available may go
//! negative) is already legitimate everywhere else in the system.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::transactions::Transaction as TransactionDto;
use crate::errors::AppError;
use crate::queries::transactions::insert_helpers::insert_transfer_pair;
use crate::queries::transactions::lock_accounts::lock_two_accounts;

pub struct TransferResult {
    pub from_leg: TransactionDto,
    pub to_leg: TransactionDto,
}

#[tracing::instrument(skip(pool))]
pub async fn create_transfer(
    pool: &PgPool,
    from: Uuid,
    to: Uuid,
    amount: i64,
    description: &str,
    date: NaiveDate,
) -> Result<TransferResult, AppError> {
    let mut tx = pool.begin().await?;

    let (from_account, to_account) = lock_two_accounts(&mut tx, from, to).await?;

    let (from_leg, to_leg) =
        insert_transfer_pair(&mut tx, &from_account, &to_account, amount, description, date).await?;

    tx.commit().await?;

    log::info!("created transfer {amount} cents from {from} to {to}");

    Ok(TransferResult { from_leg: from_leg.into(), to_leg: to_leg.into() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::PgPool;

    use crate::db::accounts::AccountType;
    use crate::queries::accounts::create_account::create_account;
    use crate::queries::accounts::get_account::get_account;

    /// Two sibling rows, opposite-signed amounts, both balances updated
    /// atomically (§3 invariant 3).
    #[sqlx::test]
    async fn transfer_moves_balance_between_both_accounts(pool: PgPool) -> anyhow::Result<()> {
        let a = create_account(&pool, "A", 100_000, AccountType::Checking).await?;
        let b = create_account(&pool, "B", 0, AccountType::Savings).await?;

        let result = create_transfer(&pool, a.id, b.id, 40_000, "move", NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
            .await?;

        assert_eq!(result.from_leg.amount, -40_000);
        assert_eq!(result.to_leg.amount, 40_000);
        assert_eq!(get_account(&pool, a.id).await?.balance, 60_000);
        assert_eq!(get_account(&pool, b.id).await?.balance, 40_000);

        Ok(())
    }

    /// S4 — transfers into a credit account are always categorised with its
    /// payment category, uniformly (§4.4, §9).
    #[sqlx::test]
    async fn transfer_to_credit_account_is_categorised_with_its_payment_category(pool: PgPool) -> anyhow::Result<()> {
        let checking = create_account(&pool, "Checking", 100_000, AccountType::Checking).await?;
        let cc = create_account(&pool, "CC", 0, AccountType::Credit).await?;

        let pay_cc_id: Uuid =
            sqlx::query_scalar("SELECT id FROM categories WHERE payment_for_account_id = $1")
                .bind(cc.id)
                .fetch_one(&pool)
                .await?;

        create_transfer(&pool, checking.id, cc.id, 30_000, "cc payment", NaiveDate::from_ymd_opt(2024, 3, 20).unwrap())
            .await?;

        let checking_after = get_account(&pool, checking.id).await?;
        let cc_after = get_account(&pool, cc.id).await?;
        assert_eq!(checking_after.balance, 70_000);
        assert_eq!(cc_after.balance, 30_000);

        let inbound_category: Option<Uuid> = sqlx::query_scalar(
            "SELECT category_id FROM transactions WHERE account_id = $1 AND amount > 0",
        )
        .bind(cc.id)
        .fetch_one(&pool)
        .await?;
        assert_eq!(inbound_category, Some(pay_cc_id));

        Ok(())
    }
}
