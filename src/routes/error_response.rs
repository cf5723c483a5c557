//! `AppError` already implements `ResponseError` and serializes itself as
//! `ErrorBody` (`crate::errors`); this schema-only alias exists so
//! `#[utoipa::path]` blocks across the route modules can reference one
//! named error type instead of re-deriving one per handler.

pub use crate::errors::ErrorBody as ErrorResponse;
