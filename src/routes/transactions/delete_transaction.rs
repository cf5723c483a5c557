use actix_web::{delete, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::transactions::delete_transaction as delete_transaction_query;
use crate::routes::error_response::ErrorResponse;

#[utoipa::path(
    delete,
    path = "/transactions/{id}",
    params(("id" = String, Path, description = "Transaction ID")),
    responses(
        (status = 204, description = "Transaction deleted (and its transfer sibling, if any)"),
        (status = 404, description = "Transaction not found", body = ErrorResponse),
    ),
    tag = "Transactions"
)]
#[delete("/{id}")]
pub async fn delete_transaction(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
    delete_transaction_query(&pool, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
