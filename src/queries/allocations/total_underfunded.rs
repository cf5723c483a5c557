//! Σ over payment categories of `Underfunded(payment, P)` — the third term
//! of `RTA(P)`.

use sqlx::PgPool;

use crate::domain::money::underfunded;
use crate::errors::AppError;
use crate::queries::allocations::allocated::allocated;
use crate::queries::allocations::payment_categories::list_payment_categories;
use crate::queries::allocations::spend_this_month::spend_this_month;

pub async fn total_underfunded(pool: &PgPool, period: &str) -> Result<i64, AppError> {
    let payment_categories = list_payment_categories(pool).await?;

    let mut total = 0i64;
    for pc in payment_categories {
        let spend = spend_this_month(pool, pc.account_id, period).await?;
        let allocated_amount = allocated(pool, pc.category_id, period).await?;
        total += underfunded(spend, allocated_amount);
    }

    Ok(total)
}
