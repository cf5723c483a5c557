use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::transactions::get_transaction as get_transaction_query;
use crate::routes::error_response::ErrorResponse;

#[utoipa::path(
    get,
    path = "/transactions/{id}",
    params(("id" = String, Path, description = "Transaction ID")),
    responses(
        (status = 200, description = "Get transaction", body = crate::db::transactions::Transaction),
        (status = 404, description = "Transaction not found", body = ErrorResponse),
    ),
    tag = "Transactions"
)]
#[get("/{id}")]
pub async fn get_transaction(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
    let transaction = get_transaction_query(&pool, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(transaction))
}
