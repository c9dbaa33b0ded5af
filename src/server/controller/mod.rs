//! HTTP request handlers.
//!
//! Each handler authenticates through `AuthGuard`, calls into the service layer and converts
//! the returned domain models into DTOs. Every handler carries a `#[utoipa::path]` so the
//! router can collect the OpenAPI document from the same definitions.

pub mod auth;
pub mod client;
pub mod company;
pub mod event;
pub mod health;
pub mod invoice;
pub mod time_entry;
pub mod user;
