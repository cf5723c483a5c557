//! `summary(period)` — the budget view: for every category, allocated,
//! activity and available, plus the payment-category-specific derived
//! amounts, plus the period's Ready-to-Assign.

use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::db::categories::Category;
use crate::domain::money::underfunded;
use crate::domain::period::validate_period;
use crate::errors::AppError;
use crate::queries::allocations::activity::activity;
use crate::queries::allocations::allocated::allocated;
use crate::queries::allocations::available::available;
use crate::queries::allocations::ready_to_assign::ready_to_assign;
use crate::queries::allocations::spend_this_month::{contributing_categories, spend_this_month};
use crate::queries::categories::list_categories::list_categories;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaymentCategoryDetails {
    pub spend_this_month: i64,
    pub underfunded: i64,
    #[schema(value_type = Vec<String>)]
    pub contributing_categories: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategorySummaryEntry {
    pub category: Category,
    pub allocated: i64,
    pub activity: i64,
    pub available: i64,
    pub payment_details: Option<PaymentCategoryDetails>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PeriodSummary {
    pub period: String,
    pub ready_to_assign: i64,
    pub categories: Vec<CategorySummaryEntry>,
}

pub async fn summary(pool: &PgPool, period: &str) -> Result<PeriodSummary, AppError> {
    validate_period(period)?;

    let categories = list_categories(pool, false).await?;
    let mut entries = Vec::with_capacity(categories.len());

    for category in categories {
        let allocated_amount = allocated(pool, category.id, period).await?;
        let activity_amount = activity(pool, category.id, period).await?;
        let available_amount = available(pool, category.id, period).await?;

        let payment_details = if let Some(account_id) = category.payment_for_account_id {
            let spend = spend_this_month(pool, account_id, period).await?;
            let contributing = contributing_categories(pool, account_id, period).await?;
            Some(PaymentCategoryDetails {
                spend_this_month: spend,
                underfunded: underfunded(spend, allocated_amount),
                contributing_categories: contributing,
            })
        } else {
            None
        };

        entries.push(CategorySummaryEntry {
            category,
            allocated: allocated_amount,
            activity: activity_amount,
            available: available_amount,
            payment_details,
        });
    }

    let rta = ready_to_assign(pool, period).await?;

    Ok(PeriodSummary { period: period.to_string(), ready_to_assign: rta, categories: entries })
}
