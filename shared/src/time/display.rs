//! Human-readable date/time rendering (ru-RU conventions)
//!
//! `DisplayOptions` follows the usual locale-formatting option set: each field
//! is either absent or carries a style. Field order, separators and month/weekday
//! names follow the Russian locale:
//!
//! | options | output |
//! |---|---|
//! | default | `15.01.2025, 14:30` |
//! | weekday long, no time | `среда, 15.01.2025` |
//! | day + month long + year | `15 января 2025 г.` |
//! | month long + year | `январь 2025 г.` |

use chrono::{DateTime, Datelike, Timelike, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::AsInstant;
use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericStyle {
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthStyle {
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
    #[serde(rename = "short")]
    Short,
    #[serde(rename = "long")]
    Long,
    /// Single letter (`Я`)
    #[serde(rename = "narrow")]
    Narrow,
}

impl MonthStyle {
    fn is_textual(self) -> bool {
        matches!(self, Self::Short | Self::Long | Self::Narrow)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    Narrow,
    Short,
    Long,
}

/// Which fields to render and how.
///
/// `Default` is the standard display set (numeric year, 2-digit month, day,
/// hour and minute). Override single fields with struct update syntax:
///
/// ```
/// use shared::time::{DisplayOptions, NumericStyle};
///
/// let with_seconds = DisplayOptions {
///     second: Some(NumericStyle::TwoDigit),
///     ..Default::default()
/// };
/// assert!(with_seconds.has_time());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    pub weekday: Option<TextStyle>,
    pub year: Option<NumericStyle>,
    pub month: Option<MonthStyle>,
    pub day: Option<NumericStyle>,
    pub hour: Option<NumericStyle>,
    pub minute: Option<NumericStyle>,
    pub second: Option<NumericStyle>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            weekday: None,
            year: Some(NumericStyle::Numeric),
            month: Some(MonthStyle::TwoDigit),
            day: Some(NumericStyle::TwoDigit),
            hour: Some(NumericStyle::TwoDigit),
            minute: Some(NumericStyle::TwoDigit),
            second: None,
        }
    }
}

impl DisplayOptions {
    /// No fields at all; renders like a date-only default.
    pub const fn empty() -> Self {
        Self {
            weekday: None,
            year: None,
            month: None,
            day: None,
            hour: None,
            minute: None,
            second: None,
        }
    }

    /// Default date fields, no time.
    pub fn date_only() -> Self {
        Self {
            hour: None,
            minute: None,
            ..Self::default()
        }
    }

    pub fn has_time(&self) -> bool {
        self.hour.is_some() || self.minute.is_some() || self.second.is_some()
    }

    fn has_date(&self) -> bool {
        self.weekday.is_some() || self.year.is_some() || self.month.is_some() || self.day.is_some()
    }
}

const MONTHS_NOMINATIVE: [&str; 12] = [
    "январь", "февраль", "март", "апрель", "май", "июнь", "июль", "август", "сентябрь",
    "октябрь", "ноябрь", "декабрь",
];
const MONTHS_GENITIVE: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября",
    "октября", "ноября", "декабря",
];
const MONTHS_SHORT: [&str; 12] = [
    "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.", "нояб.",
    "дек.",
];
const MONTHS_SHORT_STANDALONE: [&str; 12] = [
    "янв.", "февр.", "март", "апр.", "май", "июнь", "июль", "авг.", "сент.", "окт.", "нояб.",
    "дек.",
];
const MONTHS_NARROW: [&str; 12] = ["Я", "Ф", "М", "А", "М", "И", "И", "А", "С", "О", "Н", "Д"];
const WEEKDAYS_LONG: [&str; 7] = [
    "понедельник",
    "вторник",
    "среда",
    "четверг",
    "пятница",
    "суббота",
    "воскресенье",
];
const WEEKDAYS_SHORT: [&str; 7] = ["пн", "вт", "ср", "чт", "пт", "сб", "вс"];
const WEEKDAYS_NARROW: [&str; 7] = ["П", "В", "С", "Ч", "П", "С", "В"];

/// Render `time` in `tz` for people to read
pub fn format_for_display<T: AsInstant + ?Sized>(
    time: &T,
    tz: Tz,
    options: &DisplayOptions,
) -> AppResult<String> {
    let local = time.as_instant()?.with_timezone(&tz);

    let options = if options.has_date() || options.has_time() {
        *options
    } else {
        DisplayOptions::date_only()
    };

    let rendered = match (render_date(&local, &options), render_time(&local, &options)) {
        (Some(date), Some(time)) => format!("{}, {}", date, time),
        (Some(date), None) => date,
        (None, Some(time)) => time,
        (None, None) => String::new(),
    };
    Ok(rendered)
}

fn pad(value: u32, style: NumericStyle) -> String {
    match style {
        NumericStyle::Numeric => value.to_string(),
        NumericStyle::TwoDigit => format!("{:02}", value),
    }
}

fn year_text(year: i32, style: NumericStyle) -> String {
    match style {
        NumericStyle::Numeric => year.to_string(),
        NumericStyle::TwoDigit => format!("{:02}", year.rem_euclid(100)),
    }
}

fn weekday_text(weekday: Weekday, style: TextStyle) -> &'static str {
    let idx = weekday.num_days_from_monday() as usize;
    match style {
        TextStyle::Long => WEEKDAYS_LONG[idx],
        TextStyle::Short => WEEKDAYS_SHORT[idx],
        TextStyle::Narrow => WEEKDAYS_NARROW[idx],
    }
}

fn render_date(local: &DateTime<Tz>, o: &DisplayOptions) -> Option<String> {
    let body = match o.month {
        Some(month) if month.is_textual() => Some(textual_date(local, month, o)),
        _ => numeric_date(local, o),
    };
    let weekday = o.weekday.map(|style| weekday_text(local.weekday(), style));

    match (weekday, body) {
        (Some(w), Some(b)) => Some(format!("{}, {}", w, b)),
        (Some(w), None) => Some(w.to_string()),
        (None, body) => body,
    }
}

/// `15 января 2025 г.` / `январь 2025 г.`
fn textual_date(local: &DateTime<Tz>, month: MonthStyle, o: &DisplayOptions) -> String {
    let idx = local.month0() as usize;
    let month_name = match (month, o.day.is_some()) {
        (MonthStyle::Narrow, _) => MONTHS_NARROW[idx],
        (MonthStyle::Long, true) => MONTHS_GENITIVE[idx],
        (MonthStyle::Long, false) => MONTHS_NOMINATIVE[idx],
        (_, true) => MONTHS_SHORT[idx],
        (_, false) => MONTHS_SHORT_STANDALONE[idx],
    };

    let mut parts = Vec::with_capacity(3);
    if let Some(style) = o.day {
        parts.push(pad(local.day(), style));
    }
    parts.push(month_name.to_string());
    if let Some(style) = o.year {
        parts.push(format!("{} г.", year_text(local.year(), style)));
    }
    parts.join(" ")
}

/// `15.01.2025`; a lone field keeps its own style
fn numeric_date(local: &DateTime<Tz>, o: &DisplayOptions) -> Option<String> {
    let month = o.month.map(|m| match m {
        MonthStyle::Numeric => NumericStyle::Numeric,
        _ => NumericStyle::TwoDigit,
    });
    let count = [o.day.is_some(), month.is_some(), o.year.is_some()]
        .iter()
        .filter(|present| **present)
        .count();
    if count == 0 {
        return None;
    }

    let combined = count > 1;
    let field_style = |style: NumericStyle| {
        if combined {
            NumericStyle::TwoDigit
        } else {
            style
        }
    };

    let mut parts = Vec::with_capacity(3);
    if let Some(style) = o.day {
        parts.push(pad(local.day(), field_style(style)));
    }
    if let Some(style) = month {
        parts.push(pad(local.month(), field_style(style)));
    }
    if let Some(style) = o.year {
        parts.push(year_text(local.year(), style));
    }
    Some(parts.join("."))
}

/// 24-hour clock; combined fields are always zero-padded
fn render_time(local: &DateTime<Tz>, o: &DisplayOptions) -> Option<String> {
    let fields = [
        (o.hour, local.hour()),
        (o.minute, local.minute()),
        (o.second, local.second()),
    ];
    let present: Vec<(NumericStyle, u32)> = fields
        .iter()
        .filter_map(|(style, value)| style.map(|s| (s, *value)))
        .collect();

    match present.as_slice() {
        [] => None,
        [(style, value)] => Some(pad(*value, *style)),
        many => Some(
            many.iter()
                .map(|(_, value)| pad(*value, NumericStyle::TwoDigit))
                .collect::<Vec<_>>()
                .join(":"),
        ),
    }
}
