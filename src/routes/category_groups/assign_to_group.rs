//! `POST /category-groups/assign` — moves a category into a group. Lives
//! under the category-groups resource per the route surface (§6) even
//! though it mutates a category row; `assignToGroup`/`unassignFromGroup`
//! themselves live in `queries::categories` since that's the row they
//! write.

use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::categories::assign_to_group as assign_to_group_query;
use crate::routes::error_response::ErrorResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignToGroupRequest {
    #[schema(value_type = String, format = "uuid")]
    pub category_id: Uuid,
    #[schema(value_type = String, format = "uuid")]
    pub group_id: Uuid,
}

#[utoipa::path(
    post,
    path = "/category-groups/assign",
    request_body = AssignToGroupRequest,
    responses(
        (status = 200, description = "Category assigned to group", body = crate::db::categories::Category),
        (status = 400, description = "Only payment categories may join the reserved group", body = ErrorResponse),
        (status = 404, description = "Category or group not found", body = ErrorResponse),
    ),
    tag = "Category Groups"
)]
#[post("/assign")]
pub async fn assign_to_group(pool: web::Data<PgPool>, body: web::Json<AssignToGroupRequest>) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let category = assign_to_group_query(&pool, body.category_id, body.group_id).await?;
    Ok(HttpResponse::Ok().json(category))
}
