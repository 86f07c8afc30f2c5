//! Zone database operations (`bookings.zones`)
//!
//! All timestamps are UTC wall clock; callers pass `now` explicitly so the
//! reopen sweep and the handlers agree on a single clock read.

use chrono::NaiveDateTime;
use shared::models::zone::{Zone, ZoneCreate, ZoneUpdate};
use sqlx::PgPool;

pub async fn list_zones(pool: &PgPool, active_only: bool) -> Result<Vec<Zone>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, name, address, is_active, closure_reason, closed_until, created_at, updated_at
        FROM bookings.zones
        WHERE NOT $1 OR is_active
        ORDER BY name, id
        "#,
    )
    .bind(active_only)
    .fetch_all(pool)
    .await
}

pub async fn find_zone(pool: &PgPool, id: i32) -> Result<Option<Zone>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, name, address, is_active, closure_reason, closed_until, created_at, updated_at
        FROM bookings.zones
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Insert a zone; `is_active`, `created_at` and `updated_at` come from the
/// column defaults unless given.
pub async fn create_zone(pool: &PgPool, data: &ZoneCreate) -> Result<Zone, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO bookings.zones (name, address, is_active)
        VALUES ($1, $2, COALESCE($3, TRUE))
        RETURNING id, name, address, is_active, closure_reason, closed_until, created_at, updated_at
        "#,
    )
    .bind(data.name.trim())
    .bind(data.address.as_deref())
    .bind(data.is_active)
    .fetch_one(pool)
    .await
}

/// Partial update. Activating a zone also drops its closure fields.
pub async fn update_zone(
    pool: &PgPool,
    id: i32,
    data: &ZoneUpdate,
    now: NaiveDateTime,
) -> Result<Option<Zone>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE bookings.zones SET
            name = COALESCE($1, name),
            address = COALESCE($2, address),
            is_active = COALESCE($3, is_active),
            closure_reason = CASE WHEN $3 IS TRUE THEN NULL ELSE closure_reason END,
            closed_until = CASE WHEN $3 IS TRUE THEN NULL ELSE closed_until END,
            updated_at = $4
        WHERE id = $5
        RETURNING id, name, address, is_active, closure_reason, closed_until, created_at, updated_at
        "#,
    )
    .bind(data.name.as_deref().map(str::trim))
    .bind(data.address.as_deref())
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Returns whether a row was removed
pub async fn delete_zone(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
    let rows = sqlx::query("DELETE FROM bookings.zones WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// Mark a zone closed until `closed_until`. Closing an already closed zone
/// replaces its reason and deadline.
pub async fn close_zone(
    pool: &PgPool,
    id: i32,
    reason: &str,
    closed_until: NaiveDateTime,
    now: NaiveDateTime,
) -> Result<Option<Zone>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE bookings.zones SET
            is_active = FALSE,
            closure_reason = $1,
            closed_until = $2,
            updated_at = $3
        WHERE id = $4
        RETURNING id, name, address, is_active, closure_reason, closed_until, created_at, updated_at
        "#,
    )
    .bind(reason.trim())
    .bind(closed_until)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn reopen_zone(
    pool: &PgPool,
    id: i32,
    now: NaiveDateTime,
) -> Result<Option<Zone>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE bookings.zones SET
            is_active = TRUE,
            closure_reason = NULL,
            closed_until = NULL,
            updated_at = $1
        WHERE id = $2
        RETURNING id, name, address, is_active, closure_reason, closed_until, created_at, updated_at
        "#,
    )
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Reopen every closed zone whose deadline is at or before `now`
pub async fn reopen_expired_zones(
    pool: &PgPool,
    now: NaiveDateTime,
) -> Result<Vec<Zone>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE bookings.zones SET
            is_active = TRUE,
            closure_reason = NULL,
            closed_until = NULL,
            updated_at = $1
        WHERE is_active = FALSE
          AND closed_until IS NOT NULL
          AND closed_until <= $1
        RETURNING id, name, address, is_active, closure_reason, closed_until, created_at, updated_at
        "#,
    )
    .bind(now)
    .fetch_all(pool)
    .await
}
