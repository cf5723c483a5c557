//! `RTA(P)` — total real liquidity minus total money already assigned
//! minus the shortfall needed to honour this month's credit-card spending.
//! Computed fresh per period; never cached across requests (§5).

use sqlx::PgPool;

use crate::domain::period::validate_period;
use crate::errors::AppError;
use crate::queries::accounts::total_balance::total_balance;
use crate::queries::allocations::total_allocated_through_period::total_allocated_through_period;
use crate::queries::allocations::total_underfunded::total_underfunded;

pub async fn ready_to_assign(pool: &PgPool, period: &str) -> Result<i64, AppError> {
    validate_period(period)?;

    let balance = total_balance(pool).await?;
    let allocated_through_period = total_allocated_through_period(pool, period).await?;
    let underfunded_total = total_underfunded(pool, period).await?;

    Ok(crate::domain::money::ready_to_assign(balance, allocated_through_period, underfunded_total))
}
