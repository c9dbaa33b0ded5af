use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::{calendar::Session, invoice::Billable};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    /// Name of the client the session is held with.
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

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateEventDto {
    pub title: String,
    pub client: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub color: Option<String>,
    /// Defaults to whether the session already started.
    pub completed: Option<bool>,
    /// Hourly rate; falls back to the employee's rate, then the client's, then 75.
    pub rate: Option<f64>,
    /// Employers may schedule for one of their employees; defaults to the caller.
    pub employee_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateEventDto {
    pub title: String,
    pub client: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub color: Option<String>,
    pub completed: bool,
    pub rate: Option<f64>,
}

impl Session for EventDto {
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

impl Billable for EventDto {
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
