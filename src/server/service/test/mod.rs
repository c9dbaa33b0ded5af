use crate::server::model::user::User;

mod auth;
mod client;
mod invoice;
mod time_entry;

/// Converts a factory row into the domain user services take as actor.
fn actor(entity: entity::user::Model) -> User {
    User::from_entity(entity).unwrap()
}
