mod client;
mod company;
mod event;
mod invoice;
mod time_entry;
mod user;
