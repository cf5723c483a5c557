//! Upserts `(category, period)`. Allocation for a payment category is
//! allowed — it's what users do to "pay back" a month's credit spend.
//! Amount must be ≥ 0; the database's unique index on `(category_id,
//! period)` is what actually serialises concurrent upserts (§5, §8 S6).

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::allocations::{Allocation, DbAllocation};
use crate::domain::period::validate_period;
use crate::errors::AppError;
use crate::queries::categories::find_category_row::find_category_row;

#[tracing::instrument(skip(pool, notes))]
pub async fn upsert_allocation(
    pool: &PgPool,
    category_id: Uuid,
    period: &str,
    amount: i64,
    notes: Option<&str>,
) -> Result<Allocation, AppError> {
    validate_period(period)?;
    if amount < 0 {
        return Err(AppError::invalid_input("allocation amount must not be negative"));
    }

    find_category_row(pool, category_id).await?;

    let row = sqlx::query_as::<_, DbAllocation>(
        r#"
        INSERT INTO allocations (category_id, period, amount, notes)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (category_id, period)
        DO UPDATE SET amount = EXCLUDED.amount, notes = EXCLUDED.notes, updated_at = now()
        RETURNING id, category_id, period, amount, notes, created_at, updated_at
        "#,
    )
    .bind(category_id)
    .bind(period)
    .bind(amount)
    .bind(notes)
    .fetch_one(pool)
    .await?;

    log::info!("upserted allocation {} for category {category_id} in {period}: {amount} cents", row.id);

    Ok(row.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sqlx::PgPool;

    use crate::db::accounts::AccountType;
    use crate::queries::accounts::create_account::create_account;
    use crate::queries::allocations::available::available;
    use crate::queries::allocations::ready_to_assign::ready_to_assign;
    use crate::queries::categories::create_category::create_category;
    use crate::queries::transactions::create_normal::create_normal;

    #[sqlx::test]
    async fn basic_assignment_closes_ready_to_assign_to_zero(pool: PgPool) -> anyhow::Result<()> {
        let checking = create_account(&pool, "Checking", 0, AccountType::Checking).await?;
        create_normal(
            &pool,
            checking.id,
            None,
            500_000,
            "paycheck",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
        .await?;

        let rent = create_category(&pool, "Rent", None, None, None).await?;
        upsert_allocation(&pool, rent.id, "2024-01", 500_000, None).await?;

        assert_eq!(ready_to_assign(&pool, "2024-01").await?, 0);
        assert_eq!(available(&pool, rent.id, "2024-01").await?, 500_000);

        Ok(())
    }

    #[sqlx::test]
    async fn repeated_upsert_collapses_to_one_row_with_the_last_amount(pool: PgPool) -> anyhow::Result<()> {
        let food = create_category(&pool, "Food", None, None, None).await?;

        upsert_allocation(&pool, food.id, "2024-04", 10_000, None).await?;
        upsert_allocation(&pool, food.id, "2024-04", 25_000, None).await?;

        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM allocations WHERE category_id = $1 AND period = $2")
                .bind(food.id)
                .bind("2024-04")
                .fetch_one(&pool)
                .await?;
        assert_eq!(count.0, 1);
        assert_eq!(available(&pool, food.id, "2024-04").await?, 25_000);

        Ok(())
    }

    #[sqlx::test]
    async fn negative_amount_is_rejected(pool: PgPool) -> anyhow::Result<()> {
        let food = create_category(&pool, "Food", None, None, None).await?;

        let result = upsert_allocation(&pool, food.id, "2024-04", -1, None).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));

        Ok(())
    }
}
