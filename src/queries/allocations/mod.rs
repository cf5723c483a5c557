//! Allocation queries — the hardest component: upsert plus the full set of
//! derived quantities (Activity, Allocated, Available, SpendThisMonth,
//! Underfunded, Ready-to-Assign) that drive the budget view.

pub mod activity;
pub mod allocated;
pub mod available;
pub mod cover_underfunded;
pub mod delete_allocation;
pub mod get_allocation;
pub mod list_allocations;
pub mod payment_categories;
pub mod ready_to_assign;
pub mod spend_this_month;
pub mod summary;
pub mod total_allocated_through_period;
pub mod total_underfunded;
pub mod upsert_allocation;

pub use cover_underfunded::cover_underfunded;
pub use delete_allocation::delete_allocation;
pub use get_allocation::get_allocation;
pub use list_allocations::list_allocations;
pub use ready_to_assign::ready_to_assign;
pub use summary::summary;
pub use upsert_allocation::upsert_allocation;
