//! Registers `/category-groups` routes. The static `/assign` path must be
//! registered before the dynamic `/{id}` so it isn't swallowed as an id.

use actix_web::web;

pub fn configure_category_groups_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .service(crate::routes::category_groups::list_groups::list_groups)
            .service(crate::routes::category_groups::create_group::create_group)
            .service(crate::routes::category_groups::assign_to_group::assign_to_group)
            .service(crate::routes::category_groups::unassign_from_group::unassign_from_group)
            .service(crate::routes::category_groups::get_group::get_group)
            .service(crate::routes::category_groups::update_group::update_group)
            .service(crate::routes::category_groups::delete_group::delete_group),
    );
}
