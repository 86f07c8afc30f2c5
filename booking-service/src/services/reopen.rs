//! Periodic lifting of expired zone closures

use std::time::Duration;

use shared::time::now_utc;
use sqlx::PgPool;
use tokio::task::JoinHandle;

use super::zone::reopen_expired;

/// Run `reopen_expired` every `period` until the runtime shuts down
pub fn spawn_reopen_task(pool: PgPool, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        tracing::info!(period_secs = period.as_secs(), "Zone reopen task started");
        loop {
            interval.tick().await;
            if let Err(e) = reopen_expired(&pool, now_utc()).await {
                tracing::warn!(error = %e, "Zone reopen sweep failed");
            }
        }
    })
}
