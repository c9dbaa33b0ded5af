//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler through Axum's
//! state extraction. Both fields are cheap to clone: the database connection is a pool
//! and the JWT keys are small.

use sea_orm::DatabaseConnection;

use crate::server::service::auth::token::JwtKeys;

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the SQLite database.
    pub db: DatabaseConnection,

    /// Keys for issuing and verifying bearer tokens.
    pub jwt: JwtKeys,
}

impl AppState {
    pub fn new(db: DatabaseConnection, jwt: JwtKeys) -> Self {
        Self { db, jwt }
    }
}
