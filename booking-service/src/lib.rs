//! booking-service: zones of the booking system
//!
//! - Zone CRUD plus temporary closures with automatic reopening
//! - Business-clock helpers over HTTP (`/api/time`)
//! - Idempotent PostgreSQL migrations for `bookings.zones`
//!
//! All wall-clock input and display use the configured business timezone;
//! the database stores UTC.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod services;
pub mod state;
pub mod validation;

pub use config::Config;
pub use state::AppState;
