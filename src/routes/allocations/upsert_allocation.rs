use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::allocations::upsert_allocation as upsert_allocation_query;
use crate::routes::error_response::ErrorResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpsertAllocationRequest {
    #[schema(value_type = String, format = "uuid")]
    pub category_id: Uuid,
    #[schema(example = "2024-01")]
    pub period: String,
    pub amount: i64,
    pub notes: Option<String>,
}

#[utoipa::path(
    post,
    path = "/allocations",
    request_body = UpsertAllocationRequest,
    responses(
        (status = 201, description = "Allocation upserted", body = crate::db::allocations::Allocation),
        (status = 400, description = "Invalid input", body = ErrorResponse),
    ),
    tag = "Allocations"
)]
#[post("")]
pub async fn upsert_allocation(pool: web::Data<PgPool>, body: web::Json<UpsertAllocationRequest>) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let allocation =
        upsert_allocation_query(&pool, body.category_id, &body.period, body.amount, body.notes.as_deref()).await?;
    Ok(HttpResponse::Created().json(allocation))
}
