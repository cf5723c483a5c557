//! Registers `/accounts` routes. `/summary` is a static path and must be
//! registered before the dynamic `/{id}` so it isn't swallowed as an id.

use actix_web::web;

pub fn configure_accounts_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .service(crate::routes::accounts::list_accounts::list_accounts)
            .service(crate::routes::accounts::create_account::create_account)
            .service(crate::routes::accounts::summary::accounts_summary)
            .service(crate::routes::accounts::get_account::get_account)
            .service(crate::routes::accounts::update_account::update_account)
            .service(crate::routes::accounts::delete_account::delete_account),
    );
}
