use actix_web::{get, web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::transactions::{list_transactions as list_transactions_query, TransactionFilters};

#[derive(Debug, Deserialize)]
pub struct ListTransactionsQuery {
    pub account_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub uncategorized: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/transactions",
    params(
        ("account_id" = Option<String>, Query, description = "Filter by account"),
        ("category_id" = Option<String>, Query, description = "Filter by category"),
        ("start_date" = Option<String>, Query, description = "Inclusive start date"),
        ("end_date" = Option<String>, Query, description = "Exclusive end date"),
        ("uncategorized" = Option<bool>, Query, description = "Only uncategorized transactions"),
    ),
    responses((status = 200, description = "List transactions", body = [crate::db::transactions::Transaction])),
    tag = "Transactions"
)]
#[get("")]
pub async fn list_transactions(pool: web::Data<PgPool>, query: web::Query<ListTransactionsQuery>) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let filters = TransactionFilters {
        account_id: query.account_id,
        category_id: query.category_id,
        start_date: query.start_date,
        end_date: query.end_date,
        uncategorized: query.uncategorized,
    };
    let transactions = list_transactions_query(&pool, filters).await?;
    Ok(HttpResponse::Ok().json(transactions))
}
