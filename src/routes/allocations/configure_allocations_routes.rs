//! Registers `/allocations` routes. The static `/summary`, `/ready-to-assign`,
//! and `/cover-underfunded` paths must be registered before the dynamic
//! `/{id}` so they aren't swallowed as an id.

use actix_web::web;

pub fn configure_allocations_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .service(crate::routes::allocations::list_allocations::list_allocations)
            .service(crate::routes::allocations::upsert_allocation::upsert_allocation)
            .service(crate::routes::allocations::summary::summary)
            .service(crate::routes::allocations::ready_to_assign::ready_to_assign)
            .service(crate::routes::allocations::cover_underfunded::cover_underfunded)
            .service(crate::routes::allocations::get_allocation::get_allocation)
            .service(crate::routes::allocations::delete_allocation::delete_allocation),
    );
}
