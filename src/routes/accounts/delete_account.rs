use actix_web::{delete, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::accounts::delete_account as delete_account_query;
use crate::routes::error_response::ErrorResponse;

#[utoipa::path(
    delete,
    path = "/accounts/{id}",
    params(("id" = String, Path, description = "Account ID")),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 404, description = "Account not found", body = ErrorResponse),
    ),
    tag = "Accounts"
)]
#[delete("/{id}")]
pub async fn delete_account(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
    delete_account_query(&pool, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
