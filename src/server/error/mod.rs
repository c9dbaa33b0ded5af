//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by controllers and services. It wraps the
//! concern-specific errors and implements `IntoResponse`, so every failure reaches the
//! client as `{ "error": "<message>" }` with a matching status code.

pub mod auth;
pub mod config;
pub mod internal;

use std::sync::atomic::{AtomicBool, Ordering};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Whether 500 responses carry the underlying error message. Set once at startup.
static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(false);

/// Enables or disables detailed 500 responses (development only).
pub fn expose_internal_errors(enabled: bool) {
    EXPOSE_INTERNAL_ERRORS.store(enabled, Ordering::Relaxed);
}

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for its own status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Unexpected failure inside the application (hashing, token signing, ...).
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For everything else
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// The error is always logged. Clients receive a generic message unless detailed errors were
/// enabled with [`expose_internal_errors`].
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        let error = if EXPOSE_INTERNAL_ERRORS.load(Ordering::Relaxed) {
            self.0.to_string()
        } else {
            "Internal server error".to_string()
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorDto { error })).into_response()
    }
}
