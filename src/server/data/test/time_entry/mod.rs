use crate::server::{data::time_entry::TimeEntryRepository, model::time_entry::CreateTimeEntryParams};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
