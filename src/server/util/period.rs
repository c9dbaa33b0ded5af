use chrono::{DateTime, Utc};

use crate::{model::calendar::month_window, server::error::AppError};

/// Resolves a 1-based month to its `[start, end)` window in UTC.
///
/// # Returns
/// - `Ok((start, end))` - First instant of the month and first instant of the next
/// - `Err(AppError::BadRequest)` - Month outside 1..=12 or year out of range
pub fn month_bounds(year: i32, month: u32) -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
    if !(1..=12).contains(&month) {
        return Err(AppError::BadRequest(
            "Month must be between 1 and 12".to_string(),
        ));
    }

    month_window(year, month)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid year {}", year)))
}
