//! Category queries — CRUD plus group assignment and the internal
//! payment-category lifecycle hook used by `queries::accounts::create_account`.

pub mod assign_to_group;
pub mod create_category;
pub mod create_payment_category;
pub mod delete_category;
pub mod find_category_row;
pub mod get_category;
pub mod list_categories;
pub mod list_categories_by_group;
pub mod restore_category;
pub mod unassign_from_group;
pub mod update_category;

pub use assign_to_group::assign_to_group;
pub use create_category::create_category;
pub use delete_category::delete_category;
pub use find_category_row::find_category_row;
pub use get_category::get_category;
pub use list_categories::list_categories;
pub use list_categories_by_group::list_categories_by_group;
pub use restore_category::restore_category;
pub use unassign_from_group::unassign_from_group;
pub use update_category::update_category;
