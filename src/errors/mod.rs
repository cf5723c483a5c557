//! Crate-wide error type for the budgeting kernel.
//!
//! One enum covers every component (accounts, categories, transactions,
//! allocations) because §7 of the kernel spec defines a single shared kind
//! table across all of them; per-component enums would just duplicate that
//! table. Each variant maps to exactly one HTTP status via `ResponseError`.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("insufficient funds: {0}")]
    InsufficientFunds(String),

    #[error("not a payment category: {0}")]
    NotPaymentCategory(String),

    #[error("category is not underfunded: {0}")]
    NotUnderfunded(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub kind: &'static str,
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::NotFound(_) => "not_found",
            AppError::Conflict(_) => "conflict",
            AppError::InsufficientFunds(_) => "insufficient_funds",
            AppError::NotPaymentCategory(_) => "not_payment_category",
            AppError::NotUnderfunded(_) => "not_underfunded",
            AppError::Database(_) => "internal",
            AppError::Internal(_) => "internal",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InsufficientFunds(_) => StatusCode::BAD_REQUEST,
            AppError::NotPaymentCategory(_) => StatusCode::BAD_REQUEST,
            AppError::NotUnderfunded(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Database(e) => log::error!("database error: {e}"),
            AppError::Internal(e) => log::error!("internal error: {e:#}"),
            _ => log::warn!("{self}"),
        }

        let message = match self {
            AppError::Database(_) | AppError::Internal(_) => "an internal error occurred".to_string(),
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: message,
            kind: self.kind(),
        })
    }
}
