//! User domain models and parameters.

use sea_orm::DbErr;

use crate::{
    model::user::{ProfileDto, Role, UserDto},
    server::model::company::Company,
};

/// Account with credentials, role and profile.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    /// Argon2id PHC string; never leaves the server.
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub company_id: Option<i32>,
    pub profile: ProfileDto,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user
    /// - `Err(DbErr::Custom)` - Stored role is neither `employer` nor `employee`
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let role = Role::parse(&entity.role)
            .ok_or_else(|| DbErr::Custom(format!("Invalid stored role '{}'", entity.role)))?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password_hash,
            first_name: entity.first_name,
            last_name: entity.last_name,
            role,
            company_id: entity.company_id,
            profile: ProfileDto {
                phone: entity.phone,
                position: entity.position,
                department: entity.department,
                hourly_rate: entity.hourly_rate,
            },
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Converts to a DTO, embedding the user's company when given.
    pub fn into_dto(self, company: Option<Company>) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.role,
            company_id: self.company_id,
            company: company.map(Company::into_dto),
            profile: self.profile,
        }
    }
}

/// Normalises an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub profile: ProfileDto,
}

#[derive(Debug, Clone)]
pub struct UpdateProfileParams {
    pub first_name: String,
    pub last_name: String,
    pub profile: ProfileDto,
}
