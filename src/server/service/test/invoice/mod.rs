use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use super::actor;
use crate::{
    model::invoice::{
        CreateInvoiceDto, CreateInvoiceItemDto, GenerateInvoiceDto, InvoiceStatus,
    },
    server::{error::AppError, service::invoice::InvoiceService},
};
use test_utils::{builder::TestBuilder, factory};

mod generate;
mod lifecycle;
mod list;

fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

fn generate_dto(client_id: i32) -> GenerateInvoiceDto {
    GenerateInvoiceDto {
        client_id,
        year: 2025,
        month: 3,
        notes: None,
    }
}
