//! Zone management
//!
//! Validation happens before any database round trip. Closure deadlines
//! arrive as business wall clock and are stored as UTC.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use shared::error::{AppError, ErrorCode};
use shared::models::zone::{Zone, ZoneClose, ZoneCreate, ZoneUpdate};
use shared::time::{local_input_to_utc, to_local_input};
use sqlx::PgPool;

use crate::db;
use crate::error::ServiceResult;
use crate::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_REASON_LEN, validate_optional_text,
    validate_required_text,
};

/// Zone as returned by the API: stored fields plus the closure deadline as
/// business wall clock, ready for a `datetime-local` input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneView {
    #[serde(flatten)]
    pub zone: Zone,
    /// Temporarily closed (as opposed to simply deactivated)
    pub is_closed: bool,
    pub closed_until_local: Option<String>,
}

impl ZoneView {
    pub fn new(zone: Zone, tz: Tz) -> Result<Self, AppError> {
        let closed_until_local = zone
            .closed_until
            .map(|until| to_local_input(&until, tz))
            .transpose()?;
        Ok(Self {
            is_closed: zone.is_closed(),
            zone,
            closed_until_local,
        })
    }
}

fn views(zones: Vec<Zone>, tz: Tz) -> Result<Vec<ZoneView>, AppError> {
    zones.into_iter().map(|z| ZoneView::new(z, tz)).collect()
}

fn zone_not_found(id: i32) -> AppError {
    AppError::with_message(ErrorCode::ZoneNotFound, format!("Zone {id} not found"))
        .with_detail("id", id)
}

pub fn validate_create(data: &ZoneCreate) -> Result<(), AppError> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(data.address.as_deref(), "address", MAX_ADDRESS_LEN)
}

pub fn validate_update(data: &ZoneUpdate) -> Result<(), AppError> {
    if let Some(name) = &data.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(data.address.as_deref(), "address", MAX_ADDRESS_LEN)
}

/// Check a closure request and resolve its deadline to UTC
pub fn resolve_closure(
    data: &ZoneClose,
    tz: Tz,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, AppError> {
    validate_required_text(&data.reason, "reason", MAX_REASON_LEN)?;

    let closed_until = local_input_to_utc(&data.closed_until, tz)?;
    if closed_until <= now {
        return Err(AppError::new(ErrorCode::ZoneClosureInPast)
            .with_detail("closed_until", data.closed_until.as_str())
            .with_detail("now", to_local_input(&now, tz)?));
    }
    Ok(closed_until)
}

/// Zones open for booking
pub async fn list_active(pool: &PgPool, tz: Tz) -> ServiceResult<Vec<ZoneView>> {
    let zones = db::zone::list_zones(pool, true).await?;
    Ok(views(zones, tz)?)
}

/// Every zone, with expired closures lifted first so the list is current
pub async fn list_all(
    pool: &PgPool,
    tz: Tz,
    now: DateTime<Utc>,
) -> ServiceResult<Vec<ZoneView>> {
    reopen_expired(pool, now).await?;
    let zones = db::zone::list_zones(pool, false).await?;
    Ok(views(zones, tz)?)
}

pub async fn create(pool: &PgPool, tz: Tz, data: &ZoneCreate) -> ServiceResult<ZoneView> {
    validate_create(data)?;
    let zone = db::zone::create_zone(pool, data).await?;
    tracing::info!(zone_id = zone.id, name = %zone.name, "Zone created");
    Ok(ZoneView::new(zone, tz)?)
}

pub async fn update(
    pool: &PgPool,
    tz: Tz,
    id: i32,
    data: &ZoneUpdate,
    now: DateTime<Utc>,
) -> ServiceResult<ZoneView> {
    validate_update(data)?;
    let zone = db::zone::update_zone(pool, id, data, now.naive_utc())
        .await?
        .ok_or_else(|| zone_not_found(id))?;
    Ok(ZoneView::new(zone, tz)?)
}

pub async fn delete(pool: &PgPool, id: i32) -> ServiceResult<()> {
    if !db::zone::delete_zone(pool, id).await? {
        return Err(zone_not_found(id).into());
    }
    tracing::info!(zone_id = id, "Zone deleted");
    Ok(())
}

/// Temporarily close a zone
pub async fn close(
    pool: &PgPool,
    tz: Tz,
    id: i32,
    data: &ZoneClose,
    now: DateTime<Utc>,
) -> ServiceResult<ZoneView> {
    let closed_until = resolve_closure(data, tz, now)?;
    let zone = db::zone::close_zone(
        pool,
        id,
        &data.reason,
        closed_until.naive_utc(),
        now.naive_utc(),
    )
    .await?
    .ok_or_else(|| zone_not_found(id))?;

    tracing::info!(
        zone_id = id,
        reason = %data.reason.trim(),
        closed_until = %closed_until,
        "Zone closed"
    );
    Ok(ZoneView::new(zone, tz)?)
}

/// Lift a closure before its deadline
pub async fn reopen(
    pool: &PgPool,
    tz: Tz,
    id: i32,
    now: DateTime<Utc>,
) -> ServiceResult<ZoneView> {
    let zone = db::zone::find_zone(pool, id)
        .await?
        .ok_or_else(|| zone_not_found(id))?;
    if zone.is_active {
        return Err(AppError::new(ErrorCode::ZoneNotClosed)
            .with_detail("id", id)
            .into());
    }

    let zone = db::zone::reopen_zone(pool, id, now.naive_utc())
        .await?
        .ok_or_else(|| zone_not_found(id))?;
    tracing::info!(zone_id = id, "Zone reopened");
    Ok(ZoneView::new(zone, tz)?)
}

/// Reopen every zone whose closure deadline has passed
pub async fn reopen_expired(pool: &PgPool, now: DateTime<Utc>) -> ServiceResult<Vec<Zone>> {
    let reopened = db::zone::reopen_expired_zones(pool, now.naive_utc()).await?;
    if !reopened.is_empty() {
        let ids: Vec<i32> = reopened.iter().map(|z| z.id).collect();
        tracing::info!(?ids, "Reopened zones with expired closures");
    }
    Ok(reopened)
}
