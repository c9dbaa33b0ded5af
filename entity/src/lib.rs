//! SeaORM entity definitions for the Trackify schema.

pub mod prelude;

pub mod client;
pub mod company;
pub mod event;
pub mod invoice;
pub mod invoice_item;
pub mod time_entry;
pub mod user;
