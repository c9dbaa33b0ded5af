use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("No bearer token provided")]
    MissingToken,

    /// The bearer token failed signature or expiry validation.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// Token subject no longer exists in the database.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks the required permission.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Reason logged at debug level
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login with an unknown email or a wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration with an email that already has an account.
    #[error("User already exists with this email")]
    EmailTaken,
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `InvalidCredentials` / `EmailTaken` → 400 Bad Request
///
/// Every error is logged at debug level; token details never reach the client.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Authentication required"),
            Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Invalid or expired token")
            }
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
            Self::InvalidCredentials => (StatusCode::BAD_REQUEST, "Invalid email or password"),
            Self::EmailTaken => (
                StatusCode::BAD_REQUEST,
                "User already exists with this email",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
