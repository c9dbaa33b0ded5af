//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and turned
//! into DTOs at the controller boundary. Parameter types carry validated input from the
//! service layer into repositories.

pub mod auth;
pub mod client;
pub mod company;
pub mod event;
pub mod invoice;
pub mod time_entry;
pub mod user;
