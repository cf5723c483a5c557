use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::categories::create_category as create_category_query;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    #[schema(value_type = Option<String>, format = "uuid")]
    pub group_id: Option<Uuid>,
}

#[utoipa::path(
    post,
    path = "/categories",
    request_body = CreateCategoryRequest,
    responses((status = 201, description = "Category created", body = crate::db::categories::Category)),
    tag = "Categories"
)]
#[post("")]
pub async fn create_category(pool: web::Data<PgPool>, body: web::Json<CreateCategoryRequest>) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let category =
        create_category_query(&pool, &body.name, body.description.as_deref(), body.color.as_deref(), body.group_id)
            .await?;
    Ok(HttpResponse::Created().json(category))
}
