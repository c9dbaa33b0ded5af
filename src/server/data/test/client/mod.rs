use crate::server::{data::client::ClientRepository, model::client::SaveClientParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_name;
mod update;

fn client_params(name: &str, hourly_rate: f64) -> SaveClientParams {
    SaveClientParams {
        name: name.to_string(),
        email: Some("parent@example.com".to_string()),
        phone: None,
        hourly_rate,
    }
}
