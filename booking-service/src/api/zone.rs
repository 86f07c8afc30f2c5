//! Zone endpoints

use axum::Json;
use axum::extract::{Path, State};
use shared::error::{ApiResponse, AppError};
use shared::models::zone::{ZoneClose, ZoneCreate, ZoneUpdate};
use shared::time::now_utc;

use crate::services::zone::{self as service, ZoneView};
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, AppError>;

/// Zones open for booking
pub async fn list_active(State(state): State<AppState>) -> ApiResult<Vec<ZoneView>> {
    let zones = service::list_active(&state.pool, state.business_timezone).await?;
    Ok(Json(zones))
}

pub async fn list_all(State(state): State<AppState>) -> ApiResult<Vec<ZoneView>> {
    let zones = service::list_all(&state.pool, state.business_timezone, now_utc()).await?;
    Ok(Json(zones))
}

pub async fn create(
    State(state): State<AppState>,
    Json(data): Json<ZoneCreate>,
) -> ApiResult<ZoneView> {
    let zone = service::create(&state.pool, state.business_timezone, &data).await?;
    Ok(Json(zone))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(data): Json<ZoneUpdate>,
) -> ApiResult<ZoneView> {
    let zone = service::update(&state.pool, state.business_timezone, id, &data, now_utc()).await?;
    Ok(Json(zone))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ApiResponse<()>, AppError> {
    service::delete(&state.pool, id).await?;
    Ok(ApiResponse::ok())
}

pub async fn close(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(data): Json<ZoneClose>,
) -> ApiResult<ZoneView> {
    let zone = service::close(&state.pool, state.business_timezone, id, &data, now_utc()).await?;
    Ok(Json(zone))
}

pub async fn reopen(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<ZoneView> {
    let zone = service::reopen(&state.pool, state.business_timezone, id, now_utc()).await?;
    Ok(Json(zone))
}
