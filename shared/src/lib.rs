//! Shared types for the booking services
//!
//! Error types, response structures, domain models and the business-timezone
//! time helpers.

pub mod error;
pub mod models;
pub mod time;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use serde::{Deserialize, Serialize};
