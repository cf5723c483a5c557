//! Account queries — CRUD plus the total-balance aggregate RTA is built on.

pub mod create_account;
pub mod delete_account;
pub mod get_account;
pub mod list_accounts;
pub mod total_balance;
pub mod update_account;

pub use create_account::create_account;
pub use delete_account::delete_account;
pub use get_account::get_account;
pub use list_accounts::list_accounts;
pub use total_balance::total_balance;
pub use update_account::update_account;
