//! Event (scheduled session) domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::{
    calendar::Session,
    event::EventDto,
    invoice::{event_duration_hours, Billable},
};

/// A scheduled or completed session with the names of its employee and company resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub client: String,
    pub employee_id: i32,
    pub employee_name: Option<String>,
    pub company_id: i32,
    pub company_name: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub color: Option<String>,
    pub completed: bool,
    pub invoiced: bool,
    pub hours: f64,
    pub rate: f64,
    pub amount: f64,
}

impl Event {
    /// Converts an entity model, attaching names looked up by the repository.
    pub fn from_entity(
        entity: entity::event::Model,
        employee_name: Option<String>,
        company_name: Option<String>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            client: entity.client,
            employee_id: entity.employee_id,
            employee_name,
            company_id: entity.company_id,
            company_name,
            start: entity.start,
            end: entity.end,
            color: entity.color,
            completed: entity.completed,
            invoiced: entity.invoiced,
            hours: entity.hours,
            rate: entity.rate,
            amount: entity.amount,
        }
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            title: self.title,
            client: self.client,
            employee_id: self.employee_id,
            employee_name: self.employee_name,
            company_id: self.company_id,
            company_name: self.company_name,
            start: self.start,
            end: self.end,
            color: self.color,
            completed: self.completed,
            invoiced: self.invoiced,
            hours: self.hours,
            rate: self.rate,
            amount: self.amount,
        }
    }
}

impl Session for Event {
    fn start(&self) -> DateTime<Utc> {
        self.start
    }

    fn end(&self) -> DateTime<Utc> {
        self.end
    }

    fn completed(&self) -> bool {
        self.completed
    }
}

impl Billable for Event {
    fn client_name(&self) -> &str {
        &self.client
    }

    fn description(&self) -> &str {
        &self.title
    }

    fn rate(&self) -> Option<f64> {
        (self.rate > 0.0).then_some(self.rate)
    }
}

/// Start, end and rate of a session with hours and amount derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Billing {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub hours: f64,
    pub rate: f64,
    pub amount: f64,
}

impl Billing {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, rate: f64) -> Self {
        let hours = event_duration_hours(start, end);
        Self {
            start,
            end,
            hours,
            rate,
            amount: hours * rate,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub title: String,
    pub client: String,
    pub employee_id: i32,
    pub company_id: i32,
    pub color: Option<String>,
    pub completed: bool,
    pub billing: Billing,
}

#[derive(Debug, Clone)]
pub struct UpdateEventParams {
    pub title: String,
    pub client: String,
    pub color: Option<String>,
    pub completed: bool,
    pub billing: Billing,
}
