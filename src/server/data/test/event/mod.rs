use crate::server::{
    data::event::EventRepository,
    model::event::{Billing, CreateEventParams, UpdateEventParams},
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_completed_for_company;
mod get_for_employee;
mod set_completed;
mod update;

fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}
