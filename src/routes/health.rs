//! Unconditional liveness probe — `GET /health` returns `200` regardless
//! of database state (§6).

use actix_web::{get, HttpResponse, Responder};

#[utoipa::path(get, path = "/health", responses((status = 200, description = "Service is alive")), tag = "Health")]
#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().finish()
}
