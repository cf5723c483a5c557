use actix_web::{delete, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::category_groups::delete_group as delete_group_query;
use crate::routes::error_response::ErrorResponse;

#[utoipa::path(
    delete,
    path = "/category-groups/{id}",
    params(("id" = String, Path, description = "Category group ID")),
    responses(
        (status = 204, description = "Category group deleted"),
        (status = 400, description = "The reserved group cannot be deleted", body = ErrorResponse),
        (status = 404, description = "Category group not found", body = ErrorResponse),
    ),
    tag = "Category Groups"
)]
#[delete("/{id}")]
pub async fn delete_group(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
    delete_group_query(&pool, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
