//! `Available(category, as of end of P)` — the cumulative running category
//! balance through the end of `P`, with automatic perpetual rollover.
//!
//! Payment categories don't use the generic formula (§4.5): credit outflows
//! decrease Available implicitly regardless of which month they land in,
//! and a payment-categorised transfer into the credit account spends the
//! payment budget rather than adding to it via Activity. So for a payment
//! category, Available is cumulative allocated minus cumulative
//! `SpendThisMonth` on the paired credit account, not allocated plus
//! activity.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::allocations::activity::cumulative_activity_through;
use crate::queries::allocations::allocated::cumulative_allocated_through;
use crate::queries::allocations::spend_this_month::cumulative_spend_this_month_through;
use crate::queries::categories::find_category_row::find_category_row;

pub async fn available(pool: &PgPool, category_id: Uuid, period: &str) -> Result<i64, AppError> {
    let category = find_category_row(pool, category_id).await?;
    let cumulative_allocated = cumulative_allocated_through(pool, category_id, period).await?;

    if let Some(account_id) = category.payment_for_account_id {
        let cumulative_spend = cumulative_spend_this_month_through(pool, account_id, period).await?;
        return Ok(crate::domain::money::available_for_payment_category(
            cumulative_allocated,
            cumulative_spend,
        ));
    }

    let cumulative_activity = cumulative_activity_through(pool, category_id, period).await?;
    Ok(crate::domain::money::available(cumulative_allocated, cumulative_activity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sqlx::PgPool;
    use uuid::Uuid;

    use crate::db::accounts::AccountType;
    use crate::queries::accounts::create_account::create_account;
    use crate::queries::allocations::cover_underfunded::cover_underfunded;
    use crate::queries::allocations::upsert_allocation::upsert_allocation;
    use crate::queries::categories::create_category::create_category;
    use crate::queries::transactions::create_normal::create_normal;
    use crate::queries::transactions::create_transfer::create_transfer;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[sqlx::test]
    async fn unspent_allocation_rolls_over_into_the_next_period(pool: PgPool) -> anyhow::Result<()> {
        let checking = create_account(&pool, "Checking", 1_000_000, AccountType::Checking).await?;
        let food = create_category(&pool, "Food", None, None, None).await?;

        upsert_allocation(&pool, food.id, "2024-01", 50_000, None).await?;
        create_normal(&pool, checking.id, Some(food.id), -40_000, "groceries", d(2024, 1, 15)).await?;
        upsert_allocation(&pool, food.id, "2024-02", 50_000, None).await?;

        assert_eq!(available(&pool, food.id, "2024-01").await?, 10_000);
        assert_eq!(available(&pool, food.id, "2024-02").await?, 60_000);

        Ok(())
    }

    /// Regression for the payment-category Available formula (§4.5): the
    /// generic `Allocated + Activity` formula double-counts a payment
    /// transfer, which shows up as Activity *and* pays down the debt. Once
    /// a month's credit spend has been covered and the payment transfer
    /// made, Available must settle back to zero, not to the transfer amount.
    #[sqlx::test]
    async fn payment_category_available_nets_to_zero_after_cover_and_payment(pool: PgPool) -> anyhow::Result<()> {
        let checking = create_account(&pool, "Checking", 100_000, AccountType::Checking).await?;
        let cc = create_account(&pool, "CC", 0, AccountType::Credit).await?;
        let dining = create_category(&pool, "Dining", None, None, None).await?;

        create_normal(&pool, cc.id, Some(dining.id), -30_000, "dinner", d(2024, 3, 10)).await?;

        let pay_cc_id: Uuid =
            sqlx::query_scalar("SELECT id FROM categories WHERE payment_for_account_id = $1")
                .bind(cc.id)
                .fetch_one(&pool)
                .await?;

        cover_underfunded(&pool, pay_cc_id, "2024-03").await?;
        create_transfer(&pool, checking.id, cc.id, 30_000, "cc payment", d(2024, 3, 20)).await?;

        assert_eq!(available(&pool, pay_cc_id, "2024-03").await?, 0);

        Ok(())
    }

    /// Before the payment transfer is made, Available reflects the
    /// allocation covering the debt minus the spend still outstanding.
    #[sqlx::test]
    async fn payment_category_available_reflects_covered_but_unpaid_debt(pool: PgPool) -> anyhow::Result<()> {
        create_account(&pool, "Checking", 100_000, AccountType::Checking).await?;
        let cc = create_account(&pool, "CC", 0, AccountType::Credit).await?;
        let dining = create_category(&pool, "Dining", None, None, None).await?;

        create_normal(&pool, cc.id, Some(dining.id), -30_000, "dinner", d(2024, 3, 10)).await?;

        let pay_cc_id: Uuid =
            sqlx::query_scalar("SELECT id FROM categories WHERE payment_for_account_id = $1")
                .bind(cc.id)
                .fetch_one(&pool)
                .await?;

        assert_eq!(available(&pool, pay_cc_id, "2024-03").await?, -30_000);

        cover_underfunded(&pool, pay_cc_id, "2024-03").await?;
        assert_eq!(available(&pool, pay_cc_id, "2024-03").await?, 0);

        Ok(())
    }
}
