use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TimeEntryDto {
    pub id: i32,
    pub user_id: i32,
    pub client_id: Option<i32>,
    pub description: String,
    pub hours: f64,
    pub date: NaiveDate,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateTimeEntryDto {
    pub client_id: Option<i32>,
    pub description: String,
    pub hours: f64,
    pub date: NaiveDate,
}

pub fn total_hours(entries: &[TimeEntryDto]) -> f64 {
    entries.iter().map(|entry| entry.hours).sum()
}

/// Hours logged in the Monday to Sunday week containing `today`.
pub fn hours_in_week(entries: &[TimeEntryDto], today: NaiveDate) -> f64 {
    let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
    let next_monday = monday + Duration::days(7);

    entries
        .iter()
        .filter(|entry| entry.date >= monday && entry.date < next_monday)
        .map(|entry| entry.hours)
        .sum()
}
