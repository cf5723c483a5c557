//! Transaction queries — normal transactions, transfers, and the shared
//! internals (balance adjustment, account locking, sibling lookup) that
//! back them.

pub mod adjust_balance;
pub mod bulk_categorize;
pub mod create_normal;
pub mod create_transfer;
pub mod delete_transaction;
pub mod find_payment_category_for_account;
pub mod find_transfer_sibling;
pub mod get_transaction;
pub mod insert_helpers;
pub mod list_transactions;
pub mod lock_accounts;
pub mod update_transaction;

pub use bulk_categorize::bulk_categorize;
pub use create_normal::create_normal;
pub use create_transfer::create_transfer;
pub use delete_transaction::delete_transaction;
pub use get_transaction::get_transaction;
pub use list_transactions::{list_transactions, TransactionFilters};
pub use update_transaction::{update_transaction, NewTransactionFields, UpdateOutcome};
