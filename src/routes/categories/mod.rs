//! Category route handlers, mounted under `/categories`.

pub mod configure_categories_routes;
pub mod create_category;
pub mod delete_category;
pub mod get_category;
pub mod list_categories;
pub mod restore_category;
pub mod update_category;

pub use configure_categories_routes::configure_categories_routes;
