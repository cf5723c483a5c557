use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use utoipa::ToSchema;

use crate::db::accounts::{Account, AccountType};
use crate::errors::AppError;
use crate::queries::accounts::create_account as create_account_query;
use crate::routes::error_response::ErrorResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    pub name: String,
    #[serde(default)]
    pub initial_balance: i64,
    #[schema(value_type = String)]
    pub r#type: AccountType,
}

#[utoipa::path(
    post,
    path = "/accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account created", body = Account),
        (status = 400, description = "Invalid input", body = ErrorResponse),
    ),
    tag = "Accounts"
)]
#[post("")]
pub async fn create_account(pool: web::Data<PgPool>, body: web::Json<CreateAccountRequest>) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let account = create_account_query(&pool, &body.name, body.initial_balance, body.r#type).await?;
    Ok(HttpResponse::Created().json(account))
}
