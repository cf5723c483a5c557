use actix_web::{post, web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::transactions::create_normal as create_normal_query;
use crate::routes::error_response::ErrorResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNormalTransactionRequest {
    #[schema(value_type = String, format = "uuid")]
    pub account_id: Uuid,
    #[schema(value_type = Option<String>, format = "uuid")]
    pub category_id: Option<Uuid>,
    pub amount: i64,
    #[serde(default)]
    pub description: String,
    #[schema(value_type = String, format = "date")]
    pub date: NaiveDate,
}

#[utoipa::path(
    post,
    path = "/transactions",
    request_body = CreateNormalTransactionRequest,
    responses(
        (status = 201, description = "Transaction created", body = crate::db::transactions::Transaction),
        (status = 400, description = "Invalid input", body = ErrorResponse),
    ),
    tag = "Transactions"
)]
#[post("")]
pub async fn create_normal_transaction(
    pool: web::Data<PgPool>,
    body: web::Json<CreateNormalTransactionRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let transaction = create_normal_query(
        &pool,
        body.account_id,
        body.category_id,
        body.amount,
        &body.description,
        body.date,
    )
    .await?;
    Ok(HttpResponse::Created().json(transaction))
}
