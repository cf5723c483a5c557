use actix_cors::Cors;
use actix_web::{middleware as actix_middleware, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use ledger_kernel::config::Config;
use ledger_kernel::db::create_pool;
use ledger_kernel::openapi::ApiDoc;
use ledger_kernel::routes;

async fn setup_server() -> std::io::Result<()> {
    let config = Config::from_env();

    let pool = create_pool(&config.database_url, true)
        .await
        .expect("Failed to create database pool and run migrations.");

    let openapi = ApiDoc::openapi();
    let app_env = config.app_env.clone();
    let port = config.port;

    log::info!("APP_ENV is set to: {app_env}");
    log::info!("Attempting to bind server to 0.0.0.0:{port}");

    HttpServer::new(move || {
        let cors = if app_env == "development" {
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .supports_credentials()
                .max_age(3600)
        } else {
            Cors::default()
                .allow_any_origin()
                .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
                .allow_any_header()
                .max_age(3600)
        };

        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(actix_middleware::Logger::new(
                r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T"#,
            ))
            .wrap(cors)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()))
            .configure(routes::config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "production".to_string());
    if app_env == "development" || app_env == "dev" {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .format_timestamp_secs()
            .format_module_path(false)
            .format_target(true)
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .format_timestamp_secs()
            .format_module_path(false)
            .format_target(true)
            .init();
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build Tokio runtime");

    runtime.block_on(setup_server())
}
