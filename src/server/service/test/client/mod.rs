use crate::{
    model::client::SaveClientDto,
    server::{error::AppError, service::client::ClientService},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod scope;

fn save_dto(name: &str, hourly_rate: Option<f64>) -> SaveClientDto {
    SaveClientDto {
        name: name.to_string(),
        email: None,
        phone: None,
        hourly_rate,
    }
}
