//! `SpendThisMonth(payment, P)` — the amount that must eventually be paid
//! for this month's credit-card spending on the account the payment
//! category belongs to.

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::period::period_bounds;
use crate::errors::AppError;

pub async fn spend_this_month(pool: &PgPool, account_id: Uuid, period: &str) -> Result<i64, AppError> {
    let (start, end) = period_bounds(period)?;

    let (total,): (Option<i64>,) = sqlx::query_as(
        "SELECT SUM(-amount) FROM transactions WHERE account_id = $1 AND amount < 0 AND date >= $2 AND date < $3",
    )
    .bind(account_id)
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await?;

    Ok(total.unwrap_or(0))
}

/// Cumulative `SpendThisMonth` from the credit account's first transaction
/// through the end of `P` — the spend half of a payment category's
/// Available formula (§4.5). Unlike `spend_this_month`, which is scoped to
/// one calendar month, this accumulates every outflow ever posted against
/// the account, matching the perpetual-rollover semantics `available()`
/// uses for ordinary categories.
pub async fn cumulative_spend_this_month_through(pool: &PgPool, account_id: Uuid, period: &str) -> Result<i64, AppError> {
    let (_, end) = period_bounds(period)?;

    let (total,): (Option<i64>,) = sqlx::query_as(
        "SELECT SUM(-amount) FROM transactions WHERE account_id = $1 AND amount < 0 AND date < $2",
    )
    .bind(account_id)
    .bind(end)
    .fetch_one(pool)
    .await?;

    Ok(total.unwrap_or(0))
}

/// The distinct set of expense categories on outflows of the credit
/// account within the period — `contributingCategories` in `summary`.
pub async fn contributing_categories(pool: &PgPool, account_id: Uuid, period: &str) -> Result<Vec<Uuid>, AppError> {
    let (start, end) = period_bounds(period)?;

    let rows: Vec<(Uuid,)> = sqlx::query_as(
        r#"
        SELECT DISTINCT category_id FROM transactions
        WHERE account_id = $1 AND amount < 0 AND date >= $2 AND date < $3 AND category_id IS NOT NULL
        "#,
    )
    .bind(account_id)
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|(id,)| id).collect())
}
