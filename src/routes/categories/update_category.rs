use actix_web::{put, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::categories::update_category as update_category_query;
use crate::routes::error_response::ErrorResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

#[utoipa::path(
    put,
    path = "/categories/{id}",
    params(("id" = String, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = crate::db::categories::Category),
        (status = 400, description = "Payment category cannot be edited directly", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
    ),
    tag = "Categories"
)]
#[put("/{id}")]
pub async fn update_category(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateCategoryRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let category = update_category_query(
        &pool,
        path.into_inner(),
        &body.name,
        body.description.as_deref(),
        body.color.as_deref(),
    )
    .await?;
    Ok(HttpResponse::Ok().json(category))
}
