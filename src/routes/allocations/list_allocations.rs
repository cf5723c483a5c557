use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::queries::allocations::list_allocations as list_allocations_query;

#[derive(Debug, Deserialize)]
pub struct ListAllocationsQuery {
    pub period: Option<String>,
}

#[utoipa::path(
    get,
    path = "/allocations",
    params(("period" = Option<String>, Query, description = "Filter by YYYY-MM period")),
    responses((status = 200, description = "List allocations", body = [crate::db::allocations::Allocation])),
    tag = "Allocations"
)]
#[get("")]
pub async fn list_allocations(pool: web::Data<PgPool>, query: web::Query<ListAllocationsQuery>) -> Result<HttpResponse, AppError> {
    let allocations = list_allocations_query(&pool, query.period.as_deref()).await?;
    Ok(HttpResponse::Ok().json(allocations))
}
