use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

use crate::errors::AppError;
use crate::queries::category_groups::list_groups as list_groups_query;

#[utoipa::path(get, path = "/category-groups", responses((status = 200, description = "List category groups", body = [crate::db::category_groups::CategoryGroup])), tag = "Category Groups")]
#[get("")]
pub async fn list_groups(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let groups = list_groups_query(&pool).await?;
    Ok(HttpResponse::Ok().json(groups))
}
