//! Zone Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Zone entity (a reservable area: hall, floor, meeting room block)
///
/// Timestamps are UTC wall clock, as stored in `bookings.zones`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Zone {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub is_active: bool,
    /// Why the zone is temporarily closed ("Плановая уборка", "Ремонт", ...)
    pub closure_reason: Option<String>,
    /// Planned reopening time
    pub closed_until: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Zone {
    /// Temporarily closed (inactive with a reason or a reopening time)
    pub fn is_closed(&self) -> bool {
        !self.is_active && (self.closure_reason.is_some() || self.closed_until.is_some())
    }

    /// Closed, and the planned reopening time has been reached
    pub fn closure_expired(&self, now: NaiveDateTime) -> bool {
        !self.is_active && self.closed_until.is_some_and(|until| until <= now)
    }
}

/// Create zone payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneCreate {
    pub name: String,
    pub address: Option<String>,
    pub is_active: Option<bool>,
}

/// Update zone payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoneUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub is_active: Option<bool>,
}

/// Temporary closure request
///
/// `closed_until` is business-timezone wall clock (`YYYY-MM-DDTHH:mm`), as typed
/// into a `datetime-local` input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneClose {
    pub reason: String,
    pub closed_until: String,
}
