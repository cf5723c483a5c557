use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::transactions::bulk_categorize as bulk_categorize_query;
use crate::routes::error_response::ErrorResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkCategorizeRequest {
    #[schema(value_type = Vec<String>)]
    pub ids: Vec<Uuid>,
    #[schema(value_type = Option<String>, format = "uuid")]
    pub category_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BulkCategorizeResponse {
    pub updated: u64,
}

#[utoipa::path(
    post,
    path = "/transactions/bulk-categorize",
    request_body = BulkCategorizeRequest,
    responses(
        (status = 200, description = "Rows updated", body = BulkCategorizeResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
    ),
    tag = "Transactions"
)]
#[post("/bulk-categorize")]
pub async fn bulk_categorize(pool: web::Data<PgPool>, body: web::Json<BulkCategorizeRequest>) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let updated = bulk_categorize_query(&pool, &body.ids, body.category_id).await?;
    Ok(HttpResponse::Ok().json(BulkCategorizeResponse { updated }))
}
