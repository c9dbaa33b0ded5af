//! Client data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::client::{Client, SaveClientParams};

pub struct ClientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, company_id: i32, params: SaveClientParams) -> Result<Client, DbErr> {
        let now = Utc::now();
        let entity = entity::client::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            hourly_rate: ActiveValue::Set(params.hourly_rate),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Client::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Client>, DbErr> {
        let entity = entity::prelude::Client::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Client::from_entity))
    }

    /// Finds a company's client by exact name, as stored on sessions.
    pub async fn find_by_name(&self, company_id: i32, name: &str) -> Result<Option<Client>, DbErr> {
        let entity = entity::prelude::Client::find()
            .filter(entity::client::Column::CompanyId.eq(company_id))
            .filter(entity::client::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Client::from_entity))
    }

    /// All clients of a company ordered by name.
    pub async fn get_by_company(&self, company_id: i32) -> Result<Vec<Client>, DbErr> {
        let entities = entity::prelude::Client::find()
            .filter(entity::client::Column::CompanyId.eq(company_id))
            .order_by_asc(entity::client::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Client::from_entity).collect())
    }

    /// # Returns
    /// - `Ok(Some(Client))` - Updated client
    /// - `Ok(None)` - No client with that ID
    pub async fn update(&self, id: i32, params: SaveClientParams) -> Result<Option<Client>, DbErr> {
        let Some(entity) = entity::prelude::Client::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(params.name);
        active.email = ActiveValue::Set(params.email);
        active.phone = ActiveValue::Set(params.phone);
        active.hourly_rate = ActiveValue::Set(params.hourly_rate);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Client::from_entity(entity)))
    }

    /// Deletes a client, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Client::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
