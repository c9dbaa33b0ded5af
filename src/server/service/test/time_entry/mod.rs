use chrono::NaiveDate;

use super::actor;
use crate::{
    model::time_entry::CreateTimeEntryDto,
    server::{error::AppError, service::time_entry::TimeEntryService},
};
use test_utils::{builder::TestBuilder, factory};

mod create;

fn entry_dto(client_id: Option<i32>, hours: f64) -> CreateTimeEntryDto {
    CreateTimeEntryDto {
        client_id,
        description: "  Lesson prep ".to_string(),
        hours,
        date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
    }
}
