use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::{company::CompanyRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::user::User,
        service::auth::token::JwtKeys,
    },
};

pub enum Permission {
    /// Account has the employer role.
    Employer,
    /// Account belongs to some company.
    HasCompany,
    /// Account belongs to the given company.
    CompanyMember(i32),
    /// Account owns the given company.
    CompanyOwner(i32),
}

/// Resolves the bearer token on a request to a stored user and checks permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    keys: &'a JwtKeys,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, keys: &'a JwtKeys, headers: &'a HeaderMap) -> Self {
        Self { db, keys, headers }
    }

    /// Authenticates the request and checks every permission in `permissions`.
    ///
    /// The user is loaded fresh from the database, so role and company changes made after
    /// the token was issued apply immediately.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding every permission
    /// - `Err(AuthError::MissingToken)` - No bearer token on the request
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired or malformed subject
    /// - `Err(AuthError::UserNotInDatabase)` - Token subject was deleted
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;
        let claims = self.keys.verify(token)?;
        let user_id = claims
            .user_id()
            .ok_or_else(|| AuthError::InvalidToken(format!("non-numeric subject '{}'", claims.sub)))?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Employer => {
                    if user.role != Role::Employer {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "employer role required".to_string(),
                        )
                        .into());
                    }
                }
                Permission::HasCompany => {
                    if user.company_id.is_none() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "user does not belong to a company".to_string(),
                        )
                        .into());
                    }
                }
                Permission::CompanyMember(company_id) => {
                    if user.company_id != Some(*company_id) {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("user is not a member of company {}", company_id),
                        )
                        .into());
                    }
                }
                Permission::CompanyOwner(company_id) => {
                    let owns = CompanyRepository::new(self.db)
                        .find_by_id(*company_id)
                        .await?
                        .is_some_and(|company| company.owner_id == user.id);
                    if !owns {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("user does not own company {}", company_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
