use actix_web::{delete, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::allocations::delete_allocation as delete_allocation_query;
use crate::routes::error_response::ErrorResponse;

#[utoipa::path(
    delete,
    path = "/allocations/{id}",
    params(("id" = String, Path, description = "Allocation ID")),
    responses(
        (status = 204, description = "Allocation deleted"),
        (status = 404, description = "Allocation not found", body = ErrorResponse),
    ),
    tag = "Allocations"
)]
#[delete("/{id}")]
pub async fn delete_allocation(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
    delete_allocation_query(&pool, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
