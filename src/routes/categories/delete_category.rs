use actix_web::{delete, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::categories::delete_category as delete_category_query;
use crate::routes::error_response::ErrorResponse;

#[utoipa::path(
    delete,
    path = "/categories/{id}",
    params(("id" = String, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category deleted (soft or hard)"),
        (status = 400, description = "Payment category cannot be deleted directly", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
    ),
    tag = "Categories"
)]
#[delete("/{id}")]
pub async fn delete_category(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
    delete_category_query(&pool, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
