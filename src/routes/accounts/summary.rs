//! `GET /accounts/summary` — Σ(account.balance over all accounts, signed),
//! the first term of Ready-to-Assign, exposed directly for the UI's
//! top-of-page total.

use actix_web::{get, web, HttpResponse};
use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;

use crate::errors::AppError;
use crate::queries::accounts::total_balance;

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountsSummaryResponse {
    pub total_balance: i64,
}

#[utoipa::path(get, path = "/accounts/summary", responses((status = 200, description = "Total balance across all accounts", body = AccountsSummaryResponse)), tag = "Accounts")]
#[get("/summary")]
pub async fn accounts_summary(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let total = total_balance(&pool).await?;
    Ok(HttpResponse::Ok().json(AccountsSummaryResponse { total_balance: total }))
}
