//! Typed wrappers around the REST API. Only built for the browser.

#[cfg(feature = "web")]
pub mod auth;

#[cfg(feature = "web")]
pub mod client;

#[cfg(feature = "web")]
pub mod company;

#[cfg(feature = "web")]
pub mod event;

#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod invoice;

#[cfg(feature = "web")]
pub mod time_entry;

#[cfg(feature = "web")]
pub mod user;
