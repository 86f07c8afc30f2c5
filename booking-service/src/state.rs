//! Application state for booking-service

use chrono_tz::Tz;
use sqlx::PgPool;

use crate::config::Config;
use crate::db;
use crate::error::BoxError;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// Timezone for wall-clock input and display
    pub business_timezone: Tz,
}

impl AppState {
    /// Connect to the database and bring the schema up to date
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = db::connect(&config.database_url).await?;
        tracing::info!("Connected to PostgreSQL");

        db::run_migrations(&pool).await?;

        Ok(Self::with_pool(pool, config.business_timezone))
    }

    pub fn with_pool(pool: PgPool, business_timezone: Tz) -> Self {
        Self {
            pool,
            business_timezone,
        }
    }
}
