//! Account route handlers, mounted under `/accounts`.

pub mod configure_accounts_routes;
pub mod create_account;
pub mod delete_account;
pub mod get_account;
pub mod list_accounts;
pub mod summary;
pub mod update_account;

pub use configure_accounts_routes::configure_accounts_routes;
