use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::queries::categories::list_categories as list_categories_query;

#[derive(Debug, Deserialize)]
pub struct ListCategoriesQuery {
    #[serde(default)]
    pub include_deleted: bool,
}

#[utoipa::path(
    get,
    path = "/categories",
    params(("include_deleted" = Option<bool>, Query, description = "Include soft-deleted categories")),
    responses((status = 200, description = "List categories", body = [crate::db::categories::Category])),
    tag = "Categories"
)]
#[get("")]
pub async fn list_categories(pool: web::Data<PgPool>, query: web::Query<ListCategoriesQuery>) -> Result<HttpResponse, AppError> {
    let categories = list_categories_query(&pool, query.include_deleted).await?;
    Ok(HttpResponse::Ok().json(categories))
}
