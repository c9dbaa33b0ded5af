//! Email and password authentication issuing bearer tokens.

pub mod password;
pub mod token;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{JoinCompanyDto, LoginDto, RegisterDto, Role},
    server::{
        data::{company::CompanyRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{
            auth::AuthSession,
            company::{Company, SaveCompanyParams},
            user::{normalize_email, CreateUserParams, User},
        },
        service::auth::{
            password::{hash_password, verify_password},
            token::JwtKeys,
        },
    },
};

/// Shortest password accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub keys: &'a JwtKeys,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, keys: &'a JwtKeys) -> Self {
        Self { db, keys }
    }

    /// Creates an account and signs it in.
    ///
    /// Employers registering with company details get that company created with them as
    /// owner, in the same transaction as the account. Both the user email and the company
    /// email must be unused.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - New user with a fresh token
    /// - `Err(AppError::BadRequest)` - Missing email, short password or incomplete company
    /// - `Err(AppError::AuthErr(EmailTaken))` - Email already registered
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, dto: RegisterDto) -> Result<AuthSession, AppError> {
        let user_repo = UserRepository::new(self.db);
        let company_repo = CompanyRepository::new(self.db);

        let email = normalize_email(&dto.email);
        if email.is_empty() {
            return Err(AppError::BadRequest("Email is required".to_string()));
        }
        if dto.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let company_params = match (dto.role, dto.company_data) {
            (Role::Employer, Some(company_data)) => {
                let params = SaveCompanyParams::from_dto(company_data);
                if params.name.is_empty() || params.email.is_empty() {
                    return Err(AppError::BadRequest(
                        "Company name and email are required".to_string(),
                    ));
                }
                if company_repo.email_taken(&params.email, None).await? {
                    return Err(AppError::BadRequest(
                        "Company already exists with this email".to_string(),
                    ));
                }
                Some(params)
            }
            _ => None,
        };

        let params = CreateUserParams {
            email,
            password_hash: hash_password(&dto.password)?,
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            role: dto.role,
            profile: dto.profile,
        };

        let (user, company) = match company_params {
            Some(company_params) => {
                let (user, company) = user_repo
                    .create_with_company(params, company_params)
                    .await?;
                (user, Some(company))
            }
            None => (user_repo.create(params).await?, None),
        };

        self.session(user, company)
    }

    /// Verifies credentials and issues a token.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Authenticated user with company and a fresh token
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(&self, dto: LoginDto) -> Result<AuthSession, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&normalize_email(&dto.email)).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };
        if !verify_password(&dto.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let company = self.company_of(&user).await?;

        self.session(user, company)
    }

    /// Links an employee to an existing company, merging the given profile fields.
    ///
    /// Employers own their company and can never join another one.
    ///
    /// # Returns
    /// - `Ok((User, Company))` - Updated user and the joined company
    /// - `Err(AppError::NotFound)` - User or company does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - User is an employer
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn join_company(
        &self,
        user_id: i32,
        dto: JoinCompanyDto,
    ) -> Result<(User, Company), AppError> {
        let not_found = || AppError::NotFound("User or company not found".to_string());

        let user_repo = UserRepository::new(self.db);
        let existing = user_repo.find_by_id(user_id).await?.ok_or_else(not_found)?;
        if existing.role == Role::Employer {
            return Err(AuthError::AccessDenied(
                user_id,
                "employers cannot join another company".to_string(),
            )
            .into());
        }

        let company = CompanyRepository::new(self.db)
            .find_by_id(dto.company_id)
            .await?
            .ok_or_else(not_found)?;

        let user = user_repo
            .join_company(user_id, company.id, dto.profile)
            .await?
            .ok_or_else(not_found)?;

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

    fn session(&self, user: User, company: Option<Company>) -> Result<AuthSession, AppError> {
        let token = self.keys.issue(user.id, user.role, Utc::now())?;

        Ok(AuthSession {
            token,
            user,
            company,
        })
    }
}
