use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

use crate::errors::AppError;
use crate::queries::accounts::list_accounts as list_accounts_query;

#[utoipa::path(get, path = "/accounts", responses((status = 200, description = "List accounts", body = [crate::db::accounts::Account])), tag = "Accounts")]
#[get("")]
pub async fn list_accounts(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let accounts = list_accounts_query(&pool).await?;
    Ok(HttpResponse::Ok().json(accounts))
}
