//! Authentication results and token claims.

use serde::{Deserialize, Serialize};

use crate::{
    model::user::{AuthResponseDto, Role},
    server::model::{company::Company, user::User},
};

/// JWT payload. `sub` carries the user id as a string; `iat` and `exp` are Unix seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// A freshly issued token for a user.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
    pub company: Option<Company>,
}

impl AuthSession {
    pub fn into_dto(self, message: &str) -> AuthResponseDto {
        AuthResponseDto {
            message: message.to_string(),
            token: self.token,
            user: self.user.into_dto(self.company),
        }
    }
}

impl Claims {
    /// User id from the subject claim, `None` when it is not a number.
    pub fn user_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }
}
