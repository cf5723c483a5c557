//! Allocation route handlers, mounted under `/allocations`.

pub mod configure_allocations_routes;
pub mod cover_underfunded;
pub mod delete_allocation;
pub mod get_allocation;
pub mod list_allocations;
pub mod ready_to_assign;
pub mod summary;
pub mod upsert_allocation;

pub use configure_allocations_routes::configure_allocations_routes;
