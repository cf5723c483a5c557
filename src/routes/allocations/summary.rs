use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::queries::allocations::summary as summary_query;
use crate::routes::error_response::ErrorResponse;

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub period: String,
}

#[utoipa::path(
    get,
    path = "/allocations/summary",
    params(("period" = String, Query, description = "YYYY-MM period")),
    responses(
        (status = 200, description = "Budget summary for the period", body = crate::queries::allocations::summary::PeriodSummary),
        (status = 400, description = "Invalid period", body = ErrorResponse),
    ),
    tag = "Allocations"
)]
#[get("/summary")]
pub async fn summary(pool: web::Data<PgPool>, query: web::Query<SummaryQuery>) -> Result<HttpResponse, AppError> {
    let summary = summary_query(&pool, &query.period).await?;
    Ok(HttpResponse::Ok().json(summary))
}
