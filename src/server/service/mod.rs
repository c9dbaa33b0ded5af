//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, rate resolution, invoice generation and status rules
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Access Scoping**: Keeping actors inside their own company and records

pub mod auth;
pub mod client;
pub mod company;
pub mod event;
pub mod invoice;
pub mod time_entry;
pub mod user;

#[cfg(test)]
mod test;
