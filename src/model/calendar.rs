//! Month arithmetic and per-day bucketing for the calendar page and dashboards.
//!
//! Months are 1-based throughout (1 = January) and all bucketing happens in UTC.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::{event::EventDto, invoice::event_duration_hours, user::UserDto};

/// Anything scheduled on the calendar.
pub trait Session {
    fn start(&self) -> DateTime<Utc>;
    fn end(&self) -> DateTime<Utc>;
    fn completed(&self) -> bool;

    fn duration_hours(&self) -> f64 {
        event_duration_hours(self.start(), self.end())
    }
}

/// First and one-past-last instant of a month, `None` for an invalid month.
pub fn month_window(year: i32, month: u32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let (next_year, next_month) = shift_month(year, month, 1)?;
    let start = NaiveDate::from_ymd_opt(year, month, 1)?
        .and_hms_opt(0, 0, 0)?
        .and_utc();
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)?
        .and_hms_opt(0, 0, 0)?
        .and_utc();

    Some((start, end))
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    month_window(year, month)
        .map(|(start, end)| (end - start).num_days() as u32)
        .unwrap_or(0)
}

/// Weekday of the 1st of the month, 0 = Sunday.
pub fn first_weekday(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Moves `delta` months forwards or backwards, `None` when the year overflows.
pub fn shift_month(year: i32, month: u32, delta: i32) -> Option<(i32, u32)> {
    let index = year
        .checked_mul(12)?
        .checked_add(i32::try_from(month).ok()? - 1)?
        .checked_add(delta)?;
    Some((index.div_euclid(12), index.rem_euclid(12) as u32 + 1))
}

pub fn is_in_month<E: Session>(event: &E, year: i32, month: u32) -> bool {
    match month_window(year, month) {
        Some((start, end)) => event.start() >= start && event.start() < end,
        None => false,
    }
}

pub fn events_in_month<E: Session + Clone>(events: &[E], year: i32, month: u32) -> Vec<E> {
    events
        .iter()
        .filter(|event| is_in_month(*event, year, month))
        .cloned()
        .collect()
}

/// One filled cell of the month grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay<E> {
    pub day: u32,
    pub date: NaiveDate,
    pub events: Vec<E>,
}

/// Calendar cells for a month laid out Sunday-first.
///
/// The grid starts with one `None` per weekday before the 1st, followed by a cell for every
/// day holding that day's events ordered by start.
pub fn month_grid<E: Session + Clone>(
    events: &[E],
    year: i32,
    month: u32,
) -> Vec<Option<CalendarDay<E>>> {
    let mut grid: Vec<Option<CalendarDay<E>>> =
        (0..first_weekday(year, month)).map(|_| None).collect();

    for day in 1..=days_in_month(year, month) {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };

        let mut day_events: Vec<E> = events
            .iter()
            .filter(|event| event.start().date_naive() == date)
            .cloned()
            .collect();
        day_events.sort_by_key(|event| event.start());

        grid.push(Some(CalendarDay {
            day,
            date,
            events: day_events,
        }));
    }

    grid
}

/// Not completed sessions starting within the next seven days, earliest first.
pub fn upcoming_sessions<E: Session + Clone>(
    events: &[E],
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<E> {
    let horizon = now + Duration::days(7);
    let mut upcoming: Vec<E> = events
        .iter()
        .filter(|event| !event.completed() && event.start() > now && event.start() <= horizon)
        .cloned()
        .collect();
    upcoming.sort_by_key(|event| event.start());
    upcoming.truncate(limit);

    upcoming
}

/// Latest sessions first, capped at `limit`.
pub fn recent_sessions<E: Session + Clone>(events: &[E], limit: usize) -> Vec<E> {
    let mut recent = events.to_vec();
    recent.sort_by_key(|event| std::cmp::Reverse(event.start()));
    recent.truncate(limit);

    recent
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct EmployeeStats {
    pub total_hours: f64,
    pub upcoming: usize,
    pub completed: usize,
}

impl EmployeeStats {
    pub fn from_events<E: Session>(events: &[E], now: DateTime<Utc>) -> Self {
        events.iter().fold(Self::default(), |mut stats, event| {
            if event.completed() {
                stats.completed += 1;
                stats.total_hours += event.duration_hours();
            } else if event.start() > now {
                stats.upcoming += 1;
            }
            stats
        })
    }
}

/// Employer dashboard figures for the completed sessions of one month.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BusinessMetrics {
    pub total_revenue: f64,
    pub total_hours: f64,
    pub unique_clients: usize,
    pub completed_sessions: usize,
    pub active_employees: usize,
}

impl BusinessMetrics {
    /// Revenue is hours times the employee's hourly rate. Sessions of employees missing from
    /// `employees` count towards hours but add no revenue.
    pub fn for_month(events: &[EventDto], employees: &[UserDto], year: i32, month: u32) -> Self {
        let rates = employee_rates(employees);
        let completed: Vec<&EventDto> = events
            .iter()
            .filter(|event| event.completed && is_in_month(*event, year, month))
            .collect();

        let mut clients = HashSet::new();
        let mut active = HashSet::new();
        let mut metrics = Self::default();

        for event in &completed {
            let hours = event.duration_hours();
            metrics.total_hours += hours;
            if let Some(rate) = rates.get(&event.employee_id) {
                metrics.total_revenue += hours * rate;
            }
            clients.insert(event.client.as_str());
            active.insert(event.employee_id);
        }

        metrics.completed_sessions = completed.len();
        metrics.unique_clients = clients.len();
        metrics.active_employees = active.len();

        metrics
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct EmployeePerformance {
    pub employee_id: i32,
    pub name: String,
    pub hourly_rate: f64,
    pub sessions: usize,
    pub hours: f64,
    pub revenue: f64,
}

/// Per employee sessions, hours and revenue over the month's completed sessions.
pub fn employee_performance(
    events: &[EventDto],
    employees: &[UserDto],
    year: i32,
    month: u32,
) -> Vec<EmployeePerformance> {
    employees
        .iter()
        .map(|employee| {
            let rate = employee.profile.hourly_rate.unwrap_or(0.0);
            let (sessions, hours) = events
                .iter()
                .filter(|event| {
                    event.employee_id == employee.id
                        && event.completed
                        && is_in_month(*event, year, month)
                })
                .fold((0, 0.0), |(count, hours), event| {
                    (count + 1, hours + event.duration_hours())
                });

            EmployeePerformance {
                employee_id: employee.id,
                name: employee.full_name(),
                hourly_rate: rate,
                sessions,
                hours,
                revenue: hours * rate,
            }
        })
        .collect()
}

fn employee_rates(employees: &[UserDto]) -> HashMap<i32, f64> {
    employees
        .iter()
        .map(|employee| (employee.id, employee.profile.hourly_rate.unwrap_or(0.0)))
        .collect()
}
