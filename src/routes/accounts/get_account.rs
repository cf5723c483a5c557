use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::accounts::get_account as get_account_query;
use crate::routes::error_response::ErrorResponse;

#[utoipa::path(
    get,
    path = "/accounts/{id}",
    params(("id" = String, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Get account", body = crate::db::accounts::Account),
        (status = 404, description = "Account not found", body = ErrorResponse),
    ),
    tag = "Accounts"
)]
#[get("/{id}")]
pub async fn get_account(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse, AppError> {
    let account = get_account_query(&pool, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(account))
}
