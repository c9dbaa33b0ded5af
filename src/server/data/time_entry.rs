//! Time entry data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::time_entry::{CreateTimeEntryParams, TimeEntry};

pub struct TimeEntryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimeEntryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTimeEntryParams) -> Result<TimeEntry, DbErr> {
        let entity = entity::time_entry::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            client_id: ActiveValue::Set(params.client_id),
            description: ActiveValue::Set(params.description),
            hours: ActiveValue::Set(params.hours),
            date: ActiveValue::Set(params.date),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TimeEntry::from_entity(entity))
    }

    /// A user's entries, most recent date first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<TimeEntry>, DbErr> {
        let entities = entity::prelude::TimeEntry::find()
            .filter(entity::time_entry::Column::UserId.eq(user_id))
            .order_by_desc(entity::time_entry::Column::Date)
            .order_by_desc(entity::time_entry::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(TimeEntry::from_entity).collect())
    }
}
