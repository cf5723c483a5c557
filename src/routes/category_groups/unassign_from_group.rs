use actix_web::{post, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::categories::unassign_from_group as unassign_from_group_query;
use crate::routes::error_response::ErrorResponse;

#[utoipa::path(
    post,
    path = "/category-groups/unassign/{id}",
    params(("id" = String, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category unassigned from its group", body = crate::db::categories::Category),
        (status = 400, description = "Payment categories cannot leave their group", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
    ),
    tag = "Category Groups"
)]
#[post("/unassign/{id}")]
pub async fn unassign_from_group(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
    let category = unassign_from_group_query(&pool, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(category))
}
