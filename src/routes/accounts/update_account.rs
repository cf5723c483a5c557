use actix_web::{put, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::AppError;
use crate::queries::accounts::update_account as update_account_query;
use crate::routes::error_response::ErrorResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAccountRequest {
    pub name: String,
}

#[utoipa::path(
    put,
    path = "/accounts/{id}",
    params(("id" = String, Path, description = "Account ID")),
    request_body = UpdateAccountRequest,
    responses(
        (status = 200, description = "Account updated", body = crate::db::accounts::Account),
        (status = 404, description = "Account not found", body = ErrorResponse),
    ),
    tag = "Accounts"
)]
#[put("/{id}")]
pub async fn update_account(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateAccountRequest>,
) -> Result<HttpResponse, AppError> {
    let account = update_account_query(&pool, path.into_inner(), &body.name).await?;
    Ok(HttpResponse::Ok().json(account))
}
