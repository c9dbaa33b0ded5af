//! Server-side API backend and business logic.
//!
//! The backend is an Axum REST API over SeaORM and SQLite. Requests carry a JWT bearer
//! token that `middleware::auth::AuthGuard` resolves to a stored user.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, permission checks and DTO conversion
//! - **Service Layer** (`service/`) - Validation and business rules
//! - **Data Layer** (`data/`) - Repositories converting entities into domain models
//! - **Model Layer** (`model/`) - Domain models and operation parameters
//! - **Error Layer** (`error/`) - Application errors and their HTTP responses
//! - **Middleware** (`middleware/`) - Bearer token authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Database pool and JWT keys shared by handlers
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Routes, OpenAPI document, CORS and tracing
//!
//! # Request Flow
//!
//! 1. **Router** matches the request and hands it to a controller
//! 2. **Controller** authenticates with `AuthGuard` and checks permissions
//! 3. **Service** validates input and applies business rules
//! 4. **Data** reads or writes the database and returns domain models
//! 5. **Controller** converts the result into a DTO response
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
