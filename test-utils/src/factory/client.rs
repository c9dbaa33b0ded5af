//! Client factory for creating test client entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ClientFactory<'a> {
    db: &'a DatabaseConnection,
    company_id: i32,
    name: String,
    hourly_rate: f64,
}

impl<'a> ClientFactory<'a> {
    /// Defaults: name `"Client {id}"`, hourly rate `75.0`.
    pub fn new(db: &'a DatabaseConnection, company_id: i32) -> Self {
        Self {
            db,
            company_id,
            name: format!("Client {}", next_id()),
            hourly_rate: 75.0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn hourly_rate(mut self, hourly_rate: f64) -> Self {
        self.hourly_rate = hourly_rate;
        self
    }

    pub async fn build(self) -> Result<entity::client::Model, DbErr> {
        let now = Utc::now();
        entity::client::ActiveModel {
            company_id: ActiveValue::Set(self.company_id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(None),
            phone: ActiveValue::Set(None),
            hourly_rate: ActiveValue::Set(self.hourly_rate),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_client(
    db: &DatabaseConnection,
    company_id: i32,
) -> Result<entity::client::Model, DbErr> {
    ClientFactory::new(db, company_id).build().await
}
