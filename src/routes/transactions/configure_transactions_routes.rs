//! Registers `/transactions` routes. The static `/transfer` and
//! `/bulk-categorize` paths must be registered before the dynamic `/{id}`
//! so they aren't swallowed as an id.

use actix_web::web;

pub fn configure_transactions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .service(crate::routes::transactions::list_transactions::list_transactions)
            .service(crate::routes::transactions::create_normal::create_normal_transaction)
            .service(crate::routes::transactions::create_transfer::create_transfer)
            .service(crate::routes::transactions::bulk_categorize::bulk_categorize)
            .service(crate::routes::transactions::get_transaction::get_transaction)
            .service(crate::routes::transactions::update_transaction::update_transaction)
            .service(crate::routes::transactions::delete_transaction::delete_transaction),
    );
}
