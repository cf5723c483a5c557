use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use utoipa::ToSchema;

use crate::errors::AppError;
use crate::queries::category_groups::create_group as create_group_query;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateGroupRequest {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

#[utoipa::path(
    post,
    path = "/category-groups",
    request_body = CreateGroupRequest,
    responses((status = 201, description = "Category group created", body = crate::db::category_groups::CategoryGroup)),
    tag = "Category Groups"
)]
#[post("")]
pub async fn create_group(pool: web::Data<PgPool>, body: web::Json<CreateGroupRequest>) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let group = create_group_query(&pool, &body.name, body.description.as_deref(), body.display_order).await?;
    Ok(HttpResponse::Created().json(group))
}
