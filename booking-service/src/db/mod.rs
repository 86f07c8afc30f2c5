//! Database access layer

pub mod zone;

use std::str::FromStr;
use std::time::Duration;

use shared::error::{AppError, ErrorCode};
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

/// Schema migrations under `booking-service/migrations/`
///
/// Every script is idempotent (`IF NOT EXISTS` guards), so re-running one by
/// hand leaves the schema unchanged.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Connect to PostgreSQL
///
/// Sessions run in UTC so that `NOW()` column defaults and the application
/// both write UTC wall clock into `TIMESTAMP` columns.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let options = PgConnectOptions::from_str(database_url)?.options([("timezone", "UTC")]);
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
}

/// Apply pending migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    MIGRATOR.run(pool).await.map_err(|e| {
        tracing::error!(error = %e, "Schema migration failed");
        AppError::with_message(ErrorCode::MigrationFailed, e.to_string())
    })?;
    tracing::info!(count = MIGRATOR.iter().count(), "Schema migrations applied");
    Ok(())
}
