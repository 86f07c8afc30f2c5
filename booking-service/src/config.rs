//! Booking service configuration

use std::time::Duration;

use chrono_tz::Tz;
use shared::AppError;
use shared::time::{DEFAULT_TIMEZONE, parse_timezone};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
    #[error("BUSINESS_TIMEZONE: {0}")]
    Timezone(AppError),
}

/// Service configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Timezone all wall-clock input and display uses
    pub business_timezone: Tz,
    pub log_level: String,
    pub log_json: bool,
    /// Daily rolling log files go here when set; stdout otherwise
    pub log_dir: Option<String>,
    /// How often expired zone closures are lifted
    pub zone_reopen_interval: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let database_url = var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let http_port = match var("HTTP_PORT") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "HTTP_PORT",
                value: v,
            })?,
            None => 8080,
        };

        let business_timezone = match var("BUSINESS_TIMEZONE") {
            Some(name) => parse_timezone(&name).map_err(ConfigError::Timezone)?,
            None => DEFAULT_TIMEZONE,
        };

        let log_json = match var("LOG_JSON") {
            Some(v) => parse_bool(&v).ok_or(ConfigError::Invalid {
                name: "LOG_JSON",
                value: v,
            })?,
            None => false,
        };

        let reopen_secs: u64 = match var("ZONE_REOPEN_INTERVAL_SECS") {
            Some(v) => v
                .trim()
                .parse()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid {
                    name: "ZONE_REOPEN_INTERVAL_SECS",
                    value: v,
                })?,
            None => 60,
        };

        Ok(Self {
            database_url,
            http_port,
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            business_timezone,
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json,
            log_dir: var("LOG_DIR"),
            zone_reopen_interval: Duration::from_secs(reopen_secs),
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/bookings")]).unwrap();
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.environment, "development");
        assert_eq!(config.business_timezone, DEFAULT_TIMEZONE);
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
        assert!(config.log_dir.is_none());
        assert_eq!(config.zone_reopen_interval, Duration::from_secs(60));
    }

    #[test]
    fn test_database_url_required() {
        assert!(matches!(
            load(&[]),
            Err(ConfigError::Missing("DATABASE_URL"))
        ));
        assert!(matches!(
            load(&[("DATABASE_URL", "  ")]),
            Err(ConfigError::Missing("DATABASE_URL"))
        ));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("DATABASE_URL", "postgres://db/bookings"),
            ("HTTP_PORT", "9000"),
            ("BUSINESS_TIMEZONE", "Asia/Yekaterinburg"),
            ("LOG_JSON", "true"),
            ("LOG_DIR", "/var/log/booking"),
            ("ZONE_REOPEN_INTERVAL_SECS", "15"),
        ])
        .unwrap();
        assert_eq!(config.http_port, 9000);
        assert_eq!(config.business_timezone, chrono_tz::Asia::Yekaterinburg);
        assert!(config.log_json);
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/booking"));
        assert_eq!(config.zone_reopen_interval, Duration::from_secs(15));
    }

    #[test]
    fn test_invalid_values() {
        let base = ("DATABASE_URL", "postgres://db/bookings");
        assert!(matches!(
            load(&[base, ("HTTP_PORT", "eighty")]),
            Err(ConfigError::Invalid { name: "HTTP_PORT", .. })
        ));
        assert!(matches!(
            load(&[base, ("BUSINESS_TIMEZONE", "Moscow")]),
            Err(ConfigError::Timezone(_))
        ));
        assert!(matches!(
            load(&[base, ("ZONE_REOPEN_INTERVAL_SECS", "0")]),
            Err(ConfigError::Invalid { .. })
        ));
        assert!(matches!(
            load(&[base, ("LOG_JSON", "maybe")]),
            Err(ConfigError::Invalid { name: "LOG_JSON", .. })
        ));
    }
}
