use actix_web::web;

pub fn configure_categories_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .service(crate::routes::categories::list_categories::list_categories)
            .service(crate::routes::categories::create_category::create_category)
            .service(crate::routes::categories::get_category::get_category)
            .service(crate::routes::categories::update_category::update_category)
            .service(crate::routes::categories::delete_category::delete_category)
            .service(crate::routes::categories::restore_category::restore_category),
    );
}
