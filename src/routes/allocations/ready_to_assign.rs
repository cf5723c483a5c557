use actix_web::{get, web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::ToSchema;

use crate::errors::AppError;
use crate::queries::allocations::ready_to_assign as ready_to_assign_query;
use crate::routes::error_response::ErrorResponse;

#[derive(Debug, Deserialize)]
pub struct ReadyToAssignQuery {
    pub period: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReadyToAssignResponse {
    pub period: String,
    pub ready_to_assign: i64,
}

#[utoipa::path(
    get,
    path = "/allocations/ready-to-assign",
    params(("period" = String, Query, description = "YYYY-MM period")),
    responses(
        (status = 200, description = "Ready-to-assign for the period", body = ReadyToAssignResponse),
        (status = 400, description = "Invalid period", body = ErrorResponse),
    ),
    tag = "Allocations"
)]
#[get("/ready-to-assign")]
pub async fn ready_to_assign(pool: web::Data<PgPool>, query: web::Query<ReadyToAssignQuery>) -> Result<HttpResponse, AppError> {
    let rta = ready_to_assign_query(&pool, &query.period).await?;
    Ok(HttpResponse::Ok().json(ReadyToAssignResponse { period: query.period.clone(), ready_to_assign: rta }))
}
