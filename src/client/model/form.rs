//! Conversions between text inputs and the optional fields of the request DTOs.

use chrono::{DateTime, NaiveDateTime, Utc};

const DATETIME_LOCAL: &str = "%Y-%m-%dT%H:%M";

/// `None` for blank input, the trimmed text otherwise.
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Text for an optional field, empty when unset.
pub fn text_of(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Parses a non-negative amount such as an hourly rate; blank input is `Ok(None)`.
pub fn parse_amount(value: &str) -> Result<Option<f64>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(Some(amount)),
        _ => Err(format!("\"{}\" is not a valid amount", trimmed)),
    }
}

/// Reads a `datetime-local` input. Times are taken as UTC, like the calendar.
pub fn parse_datetime_local(value: &str) -> Result<DateTime<Utc>, String> {
    NaiveDateTime::parse_from_str(value.trim(), DATETIME_LOCAL)
        .map(|naive| naive.and_utc())
        .map_err(|_| "Pick a date and time".to_string())
}

pub fn to_datetime_local(value: DateTime<Utc>) -> String {
    value.format(DATETIME_LOCAL).to_string()
}
