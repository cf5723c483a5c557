use actix_web::{post, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::categories::restore_category as restore_category_query;
use crate::routes::error_response::ErrorResponse;

#[utoipa::path(
    post,
    path = "/categories/{id}/restore",
    params(("id" = String, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category restored", body = crate::db::categories::Category),
        (status = 404, description = "Category not found or not deleted", body = ErrorResponse),
    ),
    tag = "Categories"
)]
#[post("/{id}/restore")]
pub async fn restore_category(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
    let category = restore_category_query(&pool, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(category))
}
