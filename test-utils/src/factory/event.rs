//! Event factory for creating test session entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for scheduled sessions.
///
/// Hours and amount are derived from the start, end and rate when the row is built, the same
/// way the event service stores them.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    employee_id: i32,
    company_id: i32,
    title: String,
    client: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    rate: f64,
    completed: bool,
    invoiced: bool,
}

impl<'a> EventFactory<'a> {
    /// Defaults to a one hour, not completed session starting an hour from now at rate `75.0`.
    pub fn new(db: &'a DatabaseConnection, employee_id: i32, company_id: i32) -> Self {
        let start = Utc::now() + Duration::hours(1);
        Self {
            db,
            employee_id,
            company_id,
            title: format!("Session {}", next_id()),
            client: "Client".to_string(),
            start,
            end: start + Duration::hours(1),
            rate: 75.0,
            completed: false,
            invoiced: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn client(mut self, client: impl Into<String>) -> Self {
        self.client = client.into();
        self
    }

    /// Sets start and end of the session.
    pub fn span(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn invoiced(mut self, invoiced: bool) -> Self {
        self.invoiced = invoiced;
        self
    }

    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now();
        let hours = (self.end - self.start).num_milliseconds() as f64 / 3_600_000.0;
        entity::event::ActiveModel {
            title: ActiveValue::Set(self.title),
            client: ActiveValue::Set(self.client),
            employee_id: ActiveValue::Set(self.employee_id),
            company_id: ActiveValue::Set(self.company_id),
            start: ActiveValue::Set(self.start),
            end: ActiveValue::Set(self.end),
            color: ActiveValue::Set(None),
            completed: ActiveValue::Set(self.completed),
            invoiced: ActiveValue::Set(self.invoiced),
            hours: ActiveValue::Set(hours),
            rate: ActiveValue::Set(self.rate),
            amount: ActiveValue::Set(hours * self.rate),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_event(
    db: &DatabaseConnection,
    employee_id: i32,
    company_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, employee_id, company_id).build().await
}
