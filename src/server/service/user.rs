//! Profile of the signed-in user.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::UpdateProfileDto,
    server::{
        data::{company::CompanyRepository, user::UserRepository},
        error::AppError,
        model::{
            company::Company,
            user::{UpdateProfileParams, User},
        },
    },
};

pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads a user together with the company they belong to.
    ///
    /// # Returns
    /// - `Ok((User, Option<Company>))` - User and company, if any
    /// - `Err(AppError::NotFound)` - No such user
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_profile(&self, user_id: i32) -> Result<(User, Option<Company>), AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let company = self.company_of(&user).await?;

        Ok((user, company))
    }

    /// Replaces the user's name and profile fields.
    ///
    /// # Returns
    /// - `Ok((User, Option<Company>))` - Updated user and company, if any
    /// - `Err(AppError::BadRequest)` - Empty name or negative hourly rate
    /// - `Err(AppError::NotFound)` - No such user
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update_profile(
        &self,
        user_id: i32,
        dto: UpdateProfileDto,
    ) -> Result<(User, Option<Company>), AppError> {
        let first_name = dto.first_name.trim().to_string();
        let last_name = dto.last_name.trim().to_string();
        if first_name.is_empty() || last_name.is_empty() {
            return Err(AppError::BadRequest(
                "First and last name are required".to_string(),
            ));
        }
        if dto.profile.hourly_rate.is_some_and(|rate| rate < 0.0) {
            return Err(AppError::BadRequest(
                "Hourly rate cannot be negative".to_string(),
            ));
        }

        let user = UserRepository::new(self.db)
            .update_profile(
                user_id,
                UpdateProfileParams {
                    first_name,
                    last_name,
                    profile: dto.profile,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let company = self.company_of(&user).await?;

        Ok((user, company))
    }

    async fn company_of(&self, user: &User) -> Result<Option<Company>, AppError> {
        match user.company_id {
            Some(company_id) => Ok(CompanyRepository::new(self.db)
                .find_by_id(company_id)
                .await?),
            None => Ok(None),
        }
    }
}
