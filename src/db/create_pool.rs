//! Creates the Postgres connection pool and runs pending migrations.

use sqlx::{Error, PgPool};

/// Connects to `database_url` and runs `migrations/` if `run_migrations`.
/// Refuses to hand back a pool if a pending migration fails — the caller is
/// expected to propagate that as a non-zero exit.
pub async fn create_pool(database_url: &str, run_migrations: bool) -> Result<PgPool, Error> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    if run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| sqlx::Error::Migrate(Box::new(e)))?;
    }

    Ok(pool)
}
