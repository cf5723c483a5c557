use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::allocations::cover_underfunded as cover_underfunded_query;
use crate::routes::error_response::ErrorResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CoverUnderfundedRequest {
    #[schema(value_type = String, format = "uuid")]
    pub category_id: Uuid,
    #[schema(example = "2024-03")]
    pub period: String,
}

#[utoipa::path(
    post,
    path = "/allocations/cover-underfunded",
    request_body = CoverUnderfundedRequest,
    responses(
        (status = 200, description = "Allocation covering the deficit", body = crate::db::allocations::Allocation),
        (status = 400, description = "Not a payment category, not underfunded, or insufficient ready-to-assign", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
    ),
    tag = "Allocations"
)]
#[post("/cover-underfunded")]
pub async fn cover_underfunded(pool: web::Data<PgPool>, body: web::Json<CoverUnderfundedRequest>) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let allocation = cover_underfunded_query(&pool, body.category_id, &body.period).await?;
    Ok(HttpResponse::Ok().json(allocation))
}
