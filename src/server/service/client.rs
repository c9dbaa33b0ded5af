//! Clients billed by a company.

use sea_orm::DatabaseConnection;

use crate::{
    model::client::SaveClientDto,
    server::{
        data::client::ClientRepository,
        error::AppError,
        model::client::{Client, SaveClientParams},
    },
};

pub struct ClientService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ClientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_company(&self, company_id: i32) -> Result<Vec<Client>, AppError> {
        Ok(ClientRepository::new(self.db)
            .get_by_company(company_id)
            .await?)
    }

    /// Adds a client to the company. Client names are unique within a company since
    /// sessions refer to clients by name.
    ///
    /// # Returns
    /// - `Ok(Client)` - Created client
    /// - `Err(AppError::BadRequest)` - Empty name, negative rate or duplicate name
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, company_id: i32, dto: SaveClientDto) -> Result<Client, AppError> {
        let client_repo = ClientRepository::new(self.db);

        let params = validate(SaveClientParams::from_dto(dto))?;
        if client_repo
            .find_by_name(company_id, &params.name)
            .await?
            .is_some()
        {
            return Err(duplicate_name());
        }

        Ok(client_repo.create(company_id, params).await?)
    }

    /// # Returns
    /// - `Ok(Client)` - Updated client
    /// - `Err(AppError::BadRequest)` - Empty name, negative rate or duplicate name
    /// - `Err(AppError::NotFound)` - No such client in this company
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(
        &self,
        company_id: i32,
        id: i32,
        dto: SaveClientDto,
    ) -> Result<Client, AppError> {
        let client_repo = ClientRepository::new(self.db);

        self.find_in_company(company_id, id).await?;
        let params = validate(SaveClientParams::from_dto(dto))?;
        if let Some(other) = client_repo.find_by_name(company_id, &params.name).await? {
            if other.id != id {
                return Err(duplicate_name());
            }
        }

        client_repo
            .update(id, params)
            .await?
            .ok_or_else(not_found)
    }

    /// # Returns
    /// - `Ok(())` - Client deleted
    /// - `Err(AppError::NotFound)` - No such client in this company
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, company_id: i32, id: i32) -> Result<(), AppError> {
        self.find_in_company(company_id, id).await?;

        if !ClientRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        Ok(())
    }

    /// Loads a client only if it belongs to `company_id`.
    pub async fn find_in_company(&self, company_id: i32, id: i32) -> Result<Client, AppError> {
        ClientRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|client| client.company_id == company_id)
            .ok_or_else(not_found)
    }
}

fn validate(params: SaveClientParams) -> Result<SaveClientParams, AppError> {
    if params.name.is_empty() {
        return Err(AppError::BadRequest("Client name is required".to_string()));
    }
    if params.hourly_rate < 0.0 || !params.hourly_rate.is_finite() {
        return Err(AppError::BadRequest(
            "Hourly rate cannot be negative".to_string(),
        ));
    }

    Ok(params)
}

fn not_found() -> AppError {
    AppError::NotFound("Client not found".to_string())
}

fn duplicate_name() -> AppError {
    AppError::BadRequest("Client already exists with this name".to_string())
}
