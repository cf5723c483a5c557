//! Category group route handlers, mounted under `/category-groups`.

pub mod assign_to_group;
pub mod configure_category_groups_routes;
pub mod create_group;
pub mod delete_group;
pub mod get_group;
pub mod list_groups;
pub mod unassign_from_group;
pub mod update_group;

pub use configure_category_groups_routes::configure_category_groups_routes;
