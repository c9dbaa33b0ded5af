//! Shared data transfer objects and pure domain logic.
//!
//! Everything here compiles for both the server and the web client: request and response
//! DTOs, plus the invoice arithmetic and calendar bucketing used by the invoice generator,
//! the dashboards and the calendar page.

pub mod api;
pub mod calendar;
pub mod client;
pub mod company;
pub mod event;
pub mod invoice;
pub mod time_entry;
pub mod user;
