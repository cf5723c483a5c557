use actix_web::{put, web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::db::transactions::TransactionType;
use crate::errors::AppError;
use crate::queries::transactions::{update_transaction as update_transaction_query, NewTransactionFields, UpdateOutcome};
use crate::routes::error_response::ErrorResponse;
use crate::routes::transactions::create_transfer::TransferResponse;

/// Generic update body covering both transaction shapes. `type` selects
/// which fields are required: `normal` needs `account_id`; `transfer`
/// needs `account_id` (the "from" leg) and `transfer_to_account_id`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTransactionRequest {
    #[schema(value_type = String)]
    pub r#type: TransactionType,
    #[schema(value_type = String, format = "uuid")]
    pub account_id: Uuid,
    #[schema(value_type = Option<String>, format = "uuid")]
    pub transfer_to_account_id: Option<Uuid>,
    #[schema(value_type = Option<String>, format = "uuid")]
    pub category_id: Option<Uuid>,
    pub amount: i64,
    #[serde(default)]
    pub description: String,
    #[schema(value_type = String, format = "date")]
    pub date: NaiveDate,
}

#[utoipa::path(
    put,
    path = "/transactions/{id}",
    params(("id" = String, Path, description = "Transaction ID")),
    request_body = UpdateTransactionRequest,
    responses(
        (status = 200, description = "Transaction updated"),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Transaction not found", body = ErrorResponse),
    ),
    tag = "Transactions"
)]
#[put("/{id}")]
pub async fn update_transaction(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateTransactionRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();

    let fields = match body.r#type {
        TransactionType::Normal => NewTransactionFields::Normal {
            account_id: body.account_id,
            category_id: body.category_id,
            amount: body.amount,
            description: body.description,
            date: body.date,
        },
        TransactionType::Transfer => {
            let to = body.transfer_to_account_id.ok_or_else(|| {
                AppError::invalid_input("transfer updates require transfer_to_account_id")
            })?;
            NewTransactionFields::Transfer {
                from: body.account_id,
                to,
                amount: body.amount,
                description: body.description,
                date: body.date,
            }
        }
    };

    let outcome = update_transaction_query(&pool, path.into_inner(), fields).await?;

    let response = match outcome {
        UpdateOutcome::Normal(transaction) => HttpResponse::Ok().json(transaction),
        UpdateOutcome::Transfer(from_leg, to_leg) => HttpResponse::Ok().json(TransferResponse { from_leg, to_leg }),
    };

    Ok(response)
}
