use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::categories::get_category as get_category_query;
use crate::routes::error_response::ErrorResponse;

#[utoipa::path(
    get,
    path = "/categories/{id}",
    params(("id" = String, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Get category", body = crate::db::categories::Category),
        (status = 404, description = "Category not found", body = ErrorResponse),
    ),
    tag = "Categories"
)]
#[get("/{id}")]
pub async fn get_category(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
    let category = get_category_query(&pool, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(category))
}
