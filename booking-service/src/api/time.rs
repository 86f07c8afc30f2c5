//! Business-clock endpoints

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use shared::error::AppError;
use shared::time::{DisplayOptions, format_for_display, local_date_at, now_utc, to_local_input};

use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, AppError>;

#[derive(Debug, Serialize, Deserialize)]
pub struct ClockInfo {
    /// IANA name of the business timezone
    pub timezone: String,
    /// Current instant, RFC 3339 UTC
    pub now: String,
    /// Business-local date (`YYYY-MM-DD`)
    pub today: String,
    /// Business-local wall clock (`YYYY-MM-DDTHH:mm`)
    pub local_now: String,
}

pub async fn clock(State(state): State<AppState>) -> ApiResult<ClockInfo> {
    let tz = state.business_timezone;
    let now = now_utc();
    Ok(Json(ClockInfo {
        timezone: tz.name().to_string(),
        now: now.to_rfc3339(),
        today: local_date_at(now, tz),
        local_now: to_local_input(&now, tz)?,
    }))
}

#[derive(Debug, Deserialize)]
pub struct FormatRequest {
    /// ISO 8601 timestamp; naive values are read as UTC
    pub time: String,
    #[serde(default)]
    pub options: Option<DisplayOptions>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FormatResponse {
    pub local_input: String,
    pub display: String,
}

pub async fn format(
    State(state): State<AppState>,
    Json(req): Json<FormatRequest>,
) -> ApiResult<FormatResponse> {
    let tz = state.business_timezone;
    let options = req.options.unwrap_or_default();
    Ok(Json(FormatResponse {
        local_input: to_local_input(req.time.as_str(), tz)?,
        display: format_for_display(req.time.as_str(), tz, &options)?,
    }))
}
