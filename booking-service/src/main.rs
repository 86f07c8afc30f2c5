use booking_service::error::BoxError;
use booking_service::services::reopen::spawn_reopen_task;
use booking_service::{AppState, Config, api, logger};

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    let _log_guard = logger::init_logger(
        &config.log_level,
        config.log_json,
        config.log_dir.as_deref(),
    )?;

    tracing::info!(
        environment = %config.environment,
        timezone = %config.business_timezone,
        "Starting booking-service"
    );

    let state = AppState::new(&config).await?;

    spawn_reopen_task(state.pool.clone(), config.zone_reopen_interval);

    let app = api::create_router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("booking-service HTTP listening on {addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
