pub mod accounts;
pub mod allocations;
pub mod categories;
pub mod category_groups;
pub mod error_response;
pub mod health;
pub mod transactions;

use actix_web::web;

/// Configures all API routes for the application.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health_check);
    cfg.service(web::scope("/accounts").configure(accounts::configure_accounts_routes));
    cfg.service(web::scope("/categories").configure(categories::configure_categories_routes));
    cfg.service(web::scope("/category-groups").configure(category_groups::configure_category_groups_routes));
    cfg.service(web::scope("/transactions").configure(transactions::configure_transactions_routes));
    cfg.service(web::scope("/allocations").configure(allocations::configure_allocations_routes));
}
