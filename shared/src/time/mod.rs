//! Business-timezone time helpers
//!
//! Instants are stored and passed around as UTC; the business timezone only
//! matters at the edges, when a value is shown to a person or typed into a
//! `datetime-local` form input. Every helper takes the timezone explicitly.
//!
//! ```
//! use shared::time::{self, DEFAULT_TIMEZONE};
//!
//! let local = time::to_local_input("2025-01-15T11:30:00Z", DEFAULT_TIMEZONE).unwrap();
//! assert_eq!(local, "2025-01-15T14:30");
//! assert_eq!(time::local_input_passthrough(&local), "2025-01-15T14:30:00");
//! ```

mod display;

pub use display::{DisplayOptions, MonthStyle, NumericStyle, TextStyle, format_for_display};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{AppError, AppResult, ErrorCode};

/// Timezone used when none is configured.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Moscow;

/// `datetime-local` input format (minute precision).
pub const LOCAL_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Calendar date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Naive datetime layouts accepted by [`parse_instant`], read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Anything that names an absolute point in time.
///
/// Strings go through [`parse_instant`], so a malformed string surfaces as an
/// `InvalidFormat` error at the call that needed the instant.
pub trait AsInstant {
    fn as_instant(&self) -> AppResult<DateTime<Utc>>;
}

impl<Z: TimeZone> AsInstant for DateTime<Z> {
    fn as_instant(&self) -> AppResult<DateTime<Utc>> {
        Ok(self.with_timezone(&Utc))
    }
}

/// Naive values are UTC wall clock (that is how the database stores them).
impl AsInstant for NaiveDateTime {
    fn as_instant(&self) -> AppResult<DateTime<Utc>> {
        Ok(self.and_utc())
    }
}

impl AsInstant for str {
    fn as_instant(&self) -> AppResult<DateTime<Utc>> {
        parse_instant(self)
    }
}

impl AsInstant for String {
    fn as_instant(&self) -> AppResult<DateTime<Utc>> {
        parse_instant(self)
    }
}

/// Parse an instant from text.
///
/// Accepts RFC 3339 with an offset, `YYYY-MM-DDTHH:mm[:ss[.fff]]` (or with a
/// space separator) read as UTC, and a bare `YYYY-MM-DD` read as UTC midnight.
pub fn parse_instant(value: &str) -> AppResult<DateTime<Utc>> {
    let s = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(AppError::invalid_format(
        format!("Invalid datetime: {}", s),
        value,
    ))
}

/// Resolve an IANA timezone name
pub fn parse_timezone(name: &str) -> AppResult<Tz> {
    name.trim().parse::<Tz>().map_err(|e| {
        AppError::with_message(
            ErrorCode::UnknownTimezone,
            format!("Unknown timezone '{}': {}", name, e),
        )
        .with_detail("timezone", name)
    })
}

/// Instant → `YYYY-MM-DDTHH:mm` wall clock in `tz`, for form inputs
pub fn to_local_input<T: AsInstant + ?Sized>(time: &T, tz: Tz) -> AppResult<String> {
    let instant = time.as_instant()?;
    Ok(instant.with_timezone(&tz).format(LOCAL_INPUT_FORMAT).to_string())
}

/// `YYYY-MM-DDTHH:mm` → `YYYY-MM-DDTHH:mm:00`.
///
/// The input is assumed to already be business-timezone wall clock and is not
/// validated. No offset is attached and nothing is converted: whoever reads the
/// result must interpret it in the business timezone. Use
/// [`local_input_to_utc`] when an actual instant is needed.
pub fn local_input_passthrough(local: &str) -> String {
    format!("{}:00", local)
}

/// Business wall clock (`YYYY-MM-DDTHH:mm[:ss]`) → UTC instant
///
/// DST gap fallback: if the wall clock does not exist in `tz`, it is read as UTC.
/// Ambiguous wall clocks (DST overlap) resolve to the later instant.
pub fn local_input_to_utc(local: &str, tz: Tz) -> AppResult<DateTime<Utc>> {
    let s = local.trim();
    let naive = NaiveDateTime::parse_from_str(s, LOCAL_INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| {
            AppError::invalid_format(
                format!("Expected YYYY-MM-DDTHH:mm, got '{}'", s),
                local,
            )
        })?;
    Ok(wall_clock_to_utc(naive, tz))
}

fn wall_clock_to_utc(naive: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc())
}

/// Current instant (not timezone adjusted)
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Today's date in `tz` as `YYYY-MM-DD`
pub fn today_local(tz: Tz) -> String {
    local_date_at(now_utc(), tz)
}

/// Calendar date of `instant` as seen in `tz`
pub fn local_date_at(instant: DateTime<Utc>, tz: Tz) -> String {
    instant
        .with_timezone(&tz)
        .date_naive()
        .format(DATE_FORMAT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Timelike};

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_parse_instant_formats() {
        let expected = utc("2025-01-15T11:30:00Z");
        assert_eq!(parse_instant("2025-01-15T11:30:00Z").unwrap(), expected);
        assert_eq!(parse_instant("2025-01-15T14:30:00+03:00").unwrap(), expected);
        assert_eq!(parse_instant("2025-01-15T11:30").unwrap(), expected);
        assert_eq!(parse_instant("2025-01-15T11:30:00").unwrap(), expected);
        assert_eq!(parse_instant("2025-01-15 11:30:00.000").unwrap(), expected);
        assert_eq!(parse_instant(" 2025-01-15T11:30 ").unwrap(), expected);
        assert_eq!(
            parse_instant("2025-01-15").unwrap(),
            utc("2025-01-15T00:00:00Z")
        );
    }

    #[test]
    fn test_parse_instant_invalid() {
        for bad in ["", "yesterday", "2025-13-01", "2025-01-15T25:00", "15.01.2025"] {
            let err = parse_instant(bad).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidFormat, "input: {bad:?}");
        }
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone("Europe/Moscow").unwrap(), DEFAULT_TIMEZONE);
        assert_eq!(parse_timezone(" UTC ").unwrap(), chrono_tz::UTC);

        let err = parse_timezone("Mars/Olympus_Mons").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownTimezone);
    }

    #[test]
    fn test_to_local_input() {
        let instant = utc("2025-01-15T11:30:45Z");
        assert_eq!(
            to_local_input(&instant, DEFAULT_TIMEZONE).unwrap(),
            "2025-01-15T14:30"
        );
        assert_eq!(
            to_local_input(&instant, chrono_tz::America::New_York).unwrap(),
            "2025-01-15T06:30"
        );
        // crosses midnight
        assert_eq!(
            to_local_input("2025-01-15T22:10:00Z", DEFAULT_TIMEZONE).unwrap(),
            "2025-01-16T01:10"
        );
        // naive values are UTC
        assert_eq!(
            to_local_input(&instant.naive_utc(), DEFAULT_TIMEZONE).unwrap(),
            "2025-01-15T14:30"
        );
    }

    #[test]
    fn test_to_local_input_rejects_garbage() {
        let err = to_local_input("not a date", DEFAULT_TIMEZONE).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_local_input_passthrough() {
        assert_eq!(
            local_input_passthrough("2025-01-15T14:30"),
            "2025-01-15T14:30:00"
        );
        // not validated
        assert_eq!(local_input_passthrough("garbage"), "garbage:00");
    }

    #[test]
    fn test_local_input_to_utc() {
        assert_eq!(
            local_input_to_utc("2025-01-15T14:30", DEFAULT_TIMEZONE).unwrap(),
            utc("2025-01-15T11:30:00Z")
        );
        assert_eq!(
            local_input_to_utc("2025-01-15T14:30:00", DEFAULT_TIMEZONE).unwrap(),
            utc("2025-01-15T11:30:00Z")
        );
        assert_eq!(
            local_input_to_utc("2025-01-15 14:30", DEFAULT_TIMEZONE)
                .unwrap_err()
                .code,
            ErrorCode::InvalidFormat
        );
    }

    #[test]
    fn test_local_input_to_utc_dst() {
        let tz = chrono_tz::Europe::Berlin;
        // 02:30 does not exist on 2025-03-30 in Berlin
        assert_eq!(
            local_input_to_utc("2025-03-30T02:30", tz).unwrap(),
            utc("2025-03-30T02:30:00Z")
        );
        // 02:30 happens twice on 2025-10-26; take the later one (+01:00)
        assert_eq!(
            local_input_to_utc("2025-10-26T02:30", tz).unwrap(),
            utc("2025-10-26T01:30:00Z")
        );
    }

    #[test]
    fn test_round_trip_keeps_wall_clock_minute() {
        let zones = [
            DEFAULT_TIMEZONE,
            chrono_tz::UTC,
            chrono_tz::Asia::Kolkata,
            chrono_tz::America::Los_Angeles,
        ];
        let start = utc("2025-01-01T00:00:00Z");
        for tz in zones {
            for step in 0..200 {
                let instant = start + Duration::minutes(step * 997);
                let local = to_local_input(&instant, tz).unwrap();
                let back = local_input_to_utc(&local, tz).unwrap();
                assert_eq!(
                    to_local_input(&back, tz).unwrap(),
                    local,
                    "tz {tz} instant {instant}"
                );
                assert_eq!(back, instant.with_second(0).unwrap());
            }
        }
    }

    #[test]
    fn test_local_date_at() {
        let late_evening = utc("2025-01-15T22:30:00Z");
        assert_eq!(local_date_at(late_evening, DEFAULT_TIMEZONE), "2025-01-16");
        assert_eq!(local_date_at(late_evening, chrono_tz::UTC), "2025-01-15");
    }

    #[test]
    fn test_today_local_shape() {
        let today = today_local(DEFAULT_TIMEZONE);
        assert_eq!(today.len(), 10);
        assert!(NaiveDate::parse_from_str(&today, DATE_FORMAT).is_ok());

        let expected = Utc::now().with_timezone(&DEFAULT_TIMEZONE).date_naive();
        let parsed = NaiveDate::parse_from_str(&today, DATE_FORMAT).unwrap();
        // tolerate a midnight rollover between the two clock reads
        assert!(parsed == expected || parsed.succ_opt() == Some(expected));
    }

    #[test]
    fn test_now_utc_is_current() {
        let before = Utc::now();
        let now = now_utc();
        assert!(now >= before);
        assert!(now - before < Duration::seconds(5));
    }
}
