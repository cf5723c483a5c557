//! Category group queries. `assignToGroup`/`unassignFromGroup` live under
//! `crate::queries::categories` since they mutate a category row, not a
//! group row.

pub mod create_group;
pub mod delete_group;
pub mod get_group;
pub mod list_groups;
pub mod update_group;

pub use create_group::create_group;
pub use delete_group::delete_group;
pub use get_group::get_group;
pub use list_groups::list_groups;
pub use update_group::update_group;
