use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::category_groups::get_group as get_group_query;
use crate::routes::error_response::ErrorResponse;

#[utoipa::path(
    get,
    path = "/category-groups/{id}",
    params(("id" = String, Path, description = "Category group ID")),
    responses(
        (status = 200, description = "Get category group", body = crate::db::category_groups::CategoryGroup),
        (status = 404, description = "Category group not found", body = ErrorResponse),
    ),
    tag = "Category Groups"
)]
#[get("/{id}")]
pub async fn get_group(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
    let group = get_group_query(&pool, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(group))
}
