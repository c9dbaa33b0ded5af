//! Free-form hours logged outside of scheduled sessions.

use sea_orm::DatabaseConnection;

use crate::{
    model::time_entry::CreateTimeEntryDto,
    server::{
        data::time_entry::TimeEntryRepository,
        error::AppError,
        model::{
            time_entry::{CreateTimeEntryParams, TimeEntry},
            user::User,
        },
        service::client::ClientService,
    },
};

pub struct TimeEntryService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> TimeEntryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<TimeEntry>, AppError> {
        Ok(TimeEntryRepository::new(self.db).get_by_user(user_id).await?)
    }

    /// Logs hours for the actor, optionally against a client of their company.
    ///
    /// # Returns
    /// - `Ok(TimeEntry)` - Created entry
    /// - `Err(AppError::BadRequest)` - Hours not greater than zero
    /// - `Err(AppError::NotFound)` - Client missing or outside the actor's company
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, actor: &User, dto: CreateTimeEntryDto) -> Result<TimeEntry, AppError> {
        if !dto.hours.is_finite() || dto.hours <= 0.0 {
            return Err(AppError::BadRequest(
                "Hours must be greater than zero".to_string(),
            ));
        }

        if let Some(client_id) = dto.client_id {
            let company_id = actor
                .company_id
                .ok_or_else(|| AppError::NotFound("Client not found".to_string()))?;
            ClientService::new(self.db)
                .find_in_company(company_id, client_id)
                .await?;
        }

        Ok(TimeEntryRepository::new(self.db)
            .create(CreateTimeEntryParams {
                user_id: actor.id,
                client_id: dto.client_id,
                description: dto.description.trim().to_string(),
                hours: dto.hours,
                date: dto.date,
            })
            .await?)
    }
}
