//! Lists transactions with the filters the REST surface exposes:
//! `account_id`, `category_id`, `start_date`/`end_date`, `uncategorized`.

use chrono::NaiveDate;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::db::transactions::{DbTransaction, Transaction as TransactionDto};
use crate::errors::AppError;

#[derive(Debug, Default, Clone)]
pub struct TransactionFilters {
    pub account_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub uncategorized: Option<bool>,
}

pub async fn list_transactions(
    pool: &PgPool,
    filters: TransactionFilters,
) -> Result<Vec<TransactionDto>, AppError> {
    let mut qb = QueryBuilder::new(
        r#"
        SELECT id, type, account_id, transfer_to_account_id, category_id, amount, description, date, fitid, created_at, updated_at
        FROM transactions WHERE 1 = 1
        "#,
    );

    if let Some(account_id) = filters.account_id {
        qb.push(" AND account_id = ").push_bind(account_id);
    }
    if let Some(category_id) = filters.category_id {
        qb.push(" AND category_id = ").push_bind(category_id);
    }
    if let Some(start) = filters.start_date {
        qb.push(" AND date >= ").push_bind(start);
    }
    if let Some(end) = filters.end_date {
        qb.push(" AND date < ").push_bind(end);
    }
    if let Some(true) = filters.uncategorized {
        qb.push(" AND category_id IS NULL");
    }

    qb.push(" ORDER BY date DESC, created_at DESC");

    let rows = qb.build_query_as::<DbTransaction>().fetch_all(pool).await?;

    Ok(rows.into_iter().map(TransactionDto::from).collect())
}
