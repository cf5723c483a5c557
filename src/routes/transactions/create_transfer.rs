use actix_web::{post, web, HttpResponse};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::db::transactions::Transaction;
use crate::errors::AppError;
use crate::queries::transactions::create_transfer as create_transfer_query;
use crate::routes::error_response::ErrorResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTransferRequest {
    #[schema(value_type = String, format = "uuid")]
    pub from_account_id: Uuid,
    #[schema(value_type = String, format = "uuid")]
    pub to_account_id: Uuid,
    pub amount: i64,
    #[serde(default)]
    pub description: String,
    #[schema(value_type = String, format = "date")]
    pub date: NaiveDate,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TransferResponse {
    pub from_leg: Transaction,
    pub to_leg: Transaction,
}

#[utoipa::path(
    post,
    path = "/transactions/transfer",
    request_body = CreateTransferRequest,
    responses(
        (status = 201, description = "Transfer created", body = TransferResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
    ),
    tag = "Transactions"
)]
#[post("/transfer")]
pub async fn create_transfer(pool: web::Data<PgPool>, body: web::Json<CreateTransferRequest>) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let result = create_transfer_query(&pool, body.from_account_id, body.to_account_id, body.amount, &body.description, body.date).await?;
    Ok(HttpResponse::Created().json(TransferResponse { from_leg: result.from_leg, to_leg: result.to_leg }))
}
