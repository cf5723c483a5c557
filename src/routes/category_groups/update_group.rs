use actix_web::{put, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::category_groups::update_group as update_group_query;
use crate::routes::error_response::ErrorResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateGroupRequest {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

#[utoipa::path(
    put,
    path = "/category-groups/{id}",
    params(("id" = String, Path, description = "Category group ID")),
    request_body = UpdateGroupRequest,
    responses(
        (status = 200, description = "Category group updated", body = crate::db::category_groups::CategoryGroup),
        (status = 400, description = "The reserved group cannot be renamed", body = ErrorResponse),
        (status = 404, description = "Category group not found", body = ErrorResponse),
    ),
    tag = "Category Groups"
)]
#[put("/{id}")]
pub async fn update_group(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateGroupRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let group = update_group_query(&pool, path.into_inner(), &body.name, body.description.as_deref(), body.display_order).await?;
    Ok(HttpResponse::Ok().json(group))
}
