//! Transaction route handlers, mounted under `/transactions`.

pub mod bulk_categorize;
pub mod configure_transactions_routes;
pub mod create_normal;
pub mod create_transfer;
pub mod delete_transaction;
pub mod get_transaction;
pub mod list_transactions;
pub mod update_transaction;

pub use configure_transactions_routes::configure_transactions_routes;
