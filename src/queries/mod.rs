//! Query layer: one function per file, grouped by the component it belongs
//! to (§4 of the kernel spec). Every store/engine is a set of free
//! functions over `&PgPool` — there are no fat service structs.

pub mod accounts;
pub mod allocations;
pub mod categories;
pub mod category_groups;
pub mod transactions;
