//! Scheduling, completing and billing sessions.
//!
//! Employees manage their own sessions. Employers see and manage every session of their
//! company and may schedule sessions on behalf of their employees.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        event::{CreateEventDto, UpdateEventDto},
        invoice::DEFAULT_HOURLY_RATE,
        user::Role,
    },
    server::{
        data::{client::ClientRepository, event::EventRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{
            event::{Billing, CreateEventParams, Event, UpdateEventParams},
            user::User,
        },
        util::period::month_bounds,
    },
};

pub struct EventService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Schedules a session for the actor or, for employers, one of their employees.
    ///
    /// The hourly rate is the explicit rate if given, else the employee's profile rate,
    /// else the client's rate, else the default rate. `completed` defaults to whether the
    /// session has already started.
    ///
    /// # Returns
    /// - `Ok(Event)` - Created session with names resolved
    /// - `Err(AppError::BadRequest)` - Missing title/client, bad times, negative rate or no company
    /// - `Err(AppError::AuthErr(AccessDenied))` - Scheduling for someone outside the actor's reach
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, actor: &User, dto: CreateEventDto) -> Result<Event, AppError> {
        let company_id = actor.company_id.ok_or_else(|| {
            AppError::BadRequest("Join a company before scheduling sessions".to_string())
        })?;
        let (title, client) = validate_details(&dto.title, &dto.client)?;
        validate_times(dto.start, dto.end)?;
        validate_rate(dto.rate)?;

        let employee = match dto.employee_id {
            Some(employee_id) if employee_id != actor.id => {
                self.employee_for(actor, company_id, employee_id).await?
            }
            _ => actor.clone(),
        };

        let rate = match dto.rate.or(employee.profile.hourly_rate) {
            Some(rate) => rate,
            None => ClientRepository::new(self.db)
                .find_by_name(company_id, &client)
                .await?
                .map(|client| client.hourly_rate)
                .unwrap_or(DEFAULT_HOURLY_RATE),
        };

        let event = EventRepository::new(self.db)
            .create(CreateEventParams {
                title,
                client,
                employee_id: employee.id,
                company_id,
                color: dto.color,
                completed: dto.completed.unwrap_or(dto.start < Utc::now()),
                billing: Billing::new(dto.start, dto.end, rate),
            })
            .await?;

        Ok(event)
    }

    /// Completed sessions of a company starting in the month, optionally for one client.
    pub async fn get_completed_for_company(
        &self,
        company_id: i32,
        year: i32,
        month: u32,
        client: Option<&str>,
    ) -> Result<Vec<Event>, AppError> {
        let (start, end) = month_bounds(year, month)?;
        let client = client.map(str::trim).filter(|client| !client.is_empty());

        Ok(EventRepository::new(self.db)
            .get_completed_for_company(company_id, start, end, client, false)
            .await?)
    }

    /// Sessions shown on the actor's calendar for a month.
    ///
    /// Employers see their whole company; employees see their own sessions.
    pub async fn get_calendar(
        &self,
        actor: &User,
        year: i32,
        month: u32,
    ) -> Result<Vec<Event>, AppError> {
        let (start, end) = month_bounds(year, month)?;
        let event_repo = EventRepository::new(self.db);

        let events = match (actor.role, actor.company_id) {
            (Role::Employer, Some(company_id)) => {
                event_repo.get_for_company(company_id, start, end).await?
            }
            _ => event_repo.get_for_employee(actor.id, start, end).await?,
        };

        Ok(events)
    }

    /// Replaces a session's details and recomputes hours and amount.
    ///
    /// The existing rate is kept unless a new one is given.
    ///
    /// # Returns
    /// - `Ok(Event)` - Updated session
    /// - `Err(AppError::BadRequest)` - Missing title/client, bad times or negative rate
    /// - `Err(AppError::NotFound)` - No such session visible to the actor
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, actor: &User, id: i32, dto: UpdateEventDto) -> Result<Event, AppError> {
        let existing = self.find_accessible(actor, id).await?;
        let (title, client) = validate_details(&dto.title, &dto.client)?;
        validate_times(dto.start, dto.end)?;
        validate_rate(dto.rate)?;

        let rate = dto.rate.unwrap_or(existing.rate);

        EventRepository::new(self.db)
            .update(
                id,
                UpdateEventParams {
                    title,
                    client,
                    color: dto.color,
                    completed: dto.completed,
                    billing: Billing::new(dto.start, dto.end, rate),
                },
            )
            .await?
            .ok_or_else(not_found)
    }

    /// Marks a session as completed.
    pub async fn complete(&self, actor: &User, id: i32) -> Result<Event, AppError> {
        self.find_accessible(actor, id).await?;

        EventRepository::new(self.db)
            .set_completed(id, true)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        self.find_accessible(actor, id).await?;

        if !EventRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        Ok(())
    }

    /// Loads a session the actor owns or, for employers, one within their company.
    ///
    /// Sessions outside the actor's reach are reported as missing.
    async fn find_accessible(&self, actor: &User, id: i32) -> Result<Event, AppError> {
        let event = EventRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)?;

        let is_owner = event.employee_id == actor.id;
        let is_employer = actor.role == Role::Employer && actor.company_id == Some(event.company_id);
        if !is_owner && !is_employer {
            return Err(not_found());
        }

        Ok(event)
    }

    async fn employee_for(
        &self,
        actor: &User,
        company_id: i32,
        employee_id: i32,
    ) -> Result<User, AppError> {
        if actor.role != Role::Employer {
            return Err(AuthError::AccessDenied(
                actor.id,
                "only employers may schedule sessions for others".to_string(),
            )
            .into());
        }

        UserRepository::new(self.db)
            .find_by_id(employee_id)
            .await?
            .filter(|employee| employee.company_id == Some(company_id))
            .ok_or_else(|| {
                AuthError::AccessDenied(
                    actor.id,
                    format!("user {} is not an employee of company {}", employee_id, company_id),
                )
                .into()
            })
    }
}

fn validate_details(title: &str, client: &str) -> Result<(String, String), AppError> {
    let title = title.trim();
    let client = client.trim();
    if title.is_empty() || client.is_empty() {
        return Err(AppError::BadRequest(
            "Title and client are required".to_string(),
        ));
    }

    Ok((title.to_string(), client.to_string()))
}

fn validate_times(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), AppError> {
    if end <= start {
        return Err(AppError::BadRequest(
            "End time must be after start time".to_string(),
        ));
    }

    Ok(())
}

fn validate_rate(rate: Option<f64>) -> Result<(), AppError> {
    if rate.is_some_and(|rate| rate < 0.0 || !rate.is_finite()) {
        return Err(AppError::BadRequest(
            "Hourly rate cannot be negative".to_string(),
        ));
    }

    Ok(())
}

fn not_found() -> AppError {
    AppError::NotFound("Event not found".to_string())
}
