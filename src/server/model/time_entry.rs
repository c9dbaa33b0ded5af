use chrono::NaiveDate;

use crate::model::time_entry::TimeEntryDto;

#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntry {
    pub id: i32,
    pub user_id: i32,
    pub client_id: Option<i32>,
    pub description: String,
    pub hours: f64,
    pub date: NaiveDate,
}

impl TimeEntry {
    pub fn from_entity(entity: entity::time_entry::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            client_id: entity.client_id,
            description: entity.description,
            hours: entity.hours,
            date: entity.date,
        }
    }

    pub fn into_dto(self) -> TimeEntryDto {
        TimeEntryDto {
            id: self.id,
            user_id: self.user_id,
            client_id: self.client_id,
            description: self.description,
            hours: self.hours,
            date: self.date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTimeEntryParams {
    pub user_id: i32,
    pub client_id: Option<i32>,
    pub description: String,
    pub hours: f64,
    pub date: NaiveDate,
}
