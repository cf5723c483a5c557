use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::allocations::get_allocation as get_allocation_query;
use crate::routes::error_response::ErrorResponse;

#[utoipa::path(
    get,
    path = "/allocations/{id}",
    params(("id" = String, Path, description = "Allocation ID")),
    responses(
        (status = 200, description = "Get allocation", body = crate::db::allocations::Allocation),
        (status = 404, description = "Allocation not found", body = ErrorResponse),
    ),
    tag = "Allocations"
)]
#[get("/{id}")]
pub async fn get_allocation(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
    let allocation = get_allocation_query(&pool, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(allocation))
}
