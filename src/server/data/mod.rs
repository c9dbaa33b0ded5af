//! Database repository layer for all domain entities.
//!
//! Repositories wrap a borrowed `DatabaseConnection`, use SeaORM entity models internally
//! and hand domain models back to the service layer.

pub mod client;
pub mod company;
pub mod event;
pub mod invoice;
pub mod time_entry;
pub mod user;

#[cfg(test)]
mod test;
