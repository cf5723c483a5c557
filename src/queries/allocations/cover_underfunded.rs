//! `coverUnderfunded(paymentCategory, period)` — convenience operation
//! that upserts exactly enough allocation to retire this month's
//! credit-card spend, provided there's enough Ready-to-Assign to cover it.

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::allocations::Allocation;
use crate::domain::money::underfunded;
use crate::domain::period::validate_period;
use crate::errors::AppError;
use crate::queries::allocations::allocated::allocated;
use crate::queries::allocations::ready_to_assign::ready_to_assign;
use crate::queries::allocations::spend_this_month::spend_this_month;
use crate::queries::allocations::upsert_allocation::upsert_allocation;
use crate::queries::categories::find_category_row::find_category_row;

#[tracing::instrument(skip(pool))]
pub async fn cover_underfunded(pool: &PgPool, category_id: Uuid, period: &str) -> Result<Allocation, AppError> {
    validate_period(period)?;

    let category = find_category_row(pool, category_id).await?;
    let account_id = category.payment_for_account_id.ok_or_else(|| {
        AppError::NotPaymentCategory(format!("category {category_id} is not a payment category"))
    })?;

    let spend = spend_this_month(pool, account_id, period).await?;
    let allocated_amount = allocated(pool, category_id, period).await?;
    let deficit = underfunded(spend, allocated_amount);

    if deficit <= 0 {
        return Err(AppError::NotUnderfunded(format!(
            "payment category {category_id} is not underfunded in {period}"
        )));
    }

    let rta = ready_to_assign(pool, period).await?;
    if rta < deficit {
        return Err(AppError::InsufficientFunds(format!(
            "ready-to-assign ({rta}) is less than the underfunded amount ({deficit})"
        )));
    }

    let row = upsert_allocation(pool, category_id, period, allocated_amount + deficit, None).await?;

    log::info!("covered underfunded {deficit} cents for payment category {category_id} in {period}");

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sqlx::PgPool;

    use crate::db::accounts::AccountType;
    use crate::queries::accounts::create_account::create_account;
    use crate::queries::accounts::get_account::get_account;
    use crate::queries::categories::create_category::create_category;
    use crate::queries::transactions::create_normal::create_normal;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    async fn payment_category_id(pool: &PgPool, account_id: Uuid) -> Uuid {
        sqlx::query_scalar("SELECT id FROM categories WHERE payment_for_account_id = $1")
            .bind(account_id)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    /// S3 — covering a month's credit-card spend allocates exactly the
    /// deficit and reduces Ready-to-Assign by exactly that amount.
    #[sqlx::test]
    async fn cover_reduces_ready_to_assign_by_exactly_the_deficit(pool: PgPool) -> anyhow::Result<()> {
        create_account(&pool, "Checking", 100_000, AccountType::Checking).await?;
        let cc = create_account(&pool, "CC", 0, AccountType::Credit).await?;
        let dining = create_category(&pool, "Dining", None, None, None).await?;

        create_normal(&pool, cc.id, Some(dining.id), -30_000, "dinner", d(2024, 3, 10)).await?;

        let cc_after = get_account(&pool, cc.id).await?;
        assert_eq!(cc_after.balance, -30_000);

        let rta_before = ready_to_assign(&pool, "2024-03").await?;
        assert_eq!(rta_before, 100_000 - 30_000 - 30_000);

        let pay_cc_id = payment_category_id(&pool, cc.id).await;
        let covered = cover_underfunded(&pool, pay_cc_id, "2024-03").await?;
        assert_eq!(covered.amount, 30_000);

        let rta_after = ready_to_assign(&pool, "2024-03").await?;
        assert_eq!(rta_after, rta_before - 30_000);
        assert_eq!(rta_after, 100_000 - 30_000);

        Ok(())
    }

    /// S5 — Ready-to-Assign below the deficit rejects with a typed error.
    #[sqlx::test]
    async fn cover_fails_with_insufficient_funds(pool: PgPool) -> anyhow::Result<()> {
        create_account(&pool, "Checking", 10_000, AccountType::Checking).await?;
        let cc = create_account(&pool, "CC", 0, AccountType::Credit).await?;
        let dining = create_category(&pool, "Dining", None, None, None).await?;

        create_normal(&pool, cc.id, Some(dining.id), -30_000, "dinner", d(2024, 3, 10)).await?;

        assert_eq!(ready_to_assign(&pool, "2024-03").await?, 10_000 - 30_000);

        let pay_cc_id = payment_category_id(&pool, cc.id).await;
        let result = cover_underfunded(&pool, pay_cc_id, "2024-03").await;
        assert!(matches!(result, Err(AppError::InsufficientFunds(_))));

        Ok(())
    }

    /// Covering twice in immediate succession fails the second time: the
    /// deficit is already zero once the first call allocated it.
    #[sqlx::test]
    async fn cover_is_not_idempotent_a_second_call_finds_nothing_underfunded(pool: PgPool) -> anyhow::Result<()> {
        create_account(&pool, "Checking", 100_000, AccountType::Checking).await?;
        let cc = create_account(&pool, "CC", 0, AccountType::Credit).await?;
        let dining = create_category(&pool, "Dining", None, None, None).await?;

        create_normal(&pool, cc.id, Some(dining.id), -30_000, "dinner", d(2024, 3, 10)).await?;

        let pay_cc_id = payment_category_id(&pool, cc.id).await;
        cover_underfunded(&pool, pay_cc_id, "2024-03").await?;

        let result = cover_underfunded(&pool, pay_cc_id, "2024-03").await;
        assert!(matches!(result, Err(AppError::NotUnderfunded(_))));

        Ok(())
    }

    /// Non-payment categories are rejected outright.
    #[sqlx::test]
    async fn cover_rejects_non_payment_category(pool: PgPool) -> anyhow::Result<()> {
        let dining = create_category(&pool, "Dining", None, None, None).await?;

        let result = cover_underfunded(&pool, dining.id, "2024-03").await;
        assert!(matches!(result, Err(AppError::NotPaymentCategory(_))));

        Ok(())
    }
}
