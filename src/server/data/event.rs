//! Event data repository for scheduled sessions.
//!
//! Every query returns events with their employee and company names resolved, fetched in
//! one extra query per table rather than per row.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Select,
};

use crate::server::model::event::{Billing, CreateEventParams, Event, UpdateEventParams};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateEventParams) -> Result<Event, DbErr> {
        let now = Utc::now();
        let mut active = entity::event::ActiveModel {
            title: ActiveValue::Set(params.title),
            client: ActiveValue::Set(params.client),
            employee_id: ActiveValue::Set(params.employee_id),
            company_id: ActiveValue::Set(params.company_id),
            color: ActiveValue::Set(params.color),
            completed: ActiveValue::Set(params.completed),
            invoiced: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };
        apply_billing(&mut active, params.billing);

        let entity = active.insert(self.db).await?;

        self.single_with_names(entity).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        match entity::prelude::Event::find_by_id(id).one(self.db).await? {
            Some(entity) => self.single_with_names(entity).await.map(Some),
            None => Ok(None),
        }
    }

    /// All of a company's sessions starting within `[start, end)`.
    pub async fn get_for_company(
        &self,
        company_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Event>, DbErr> {
        let query = in_window(start, end)
            .filter(entity::event::Column::CompanyId.eq(company_id));

        self.with_names(query.all(self.db).await?).await
    }

    /// An employee's sessions starting within `[start, end)`.
    pub async fn get_for_employee(
        &self,
        employee_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Event>, DbErr> {
        let query = in_window(start, end)
            .filter(entity::event::Column::EmployeeId.eq(employee_id));

        self.with_names(query.all(self.db).await?).await
    }

    /// Completed sessions of a company within `[start, end)`.
    ///
    /// # Arguments
    /// - `client` - Restrict to sessions with this client name
    /// - `uninvoiced_only` - Skip sessions already billed on an invoice
    pub async fn get_completed_for_company(
        &self,
        company_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        client: Option<&str>,
        uninvoiced_only: bool,
    ) -> Result<Vec<Event>, DbErr> {
        let mut query = in_window(start, end)
            .filter(entity::event::Column::CompanyId.eq(company_id))
            .filter(entity::event::Column::Completed.eq(true));

        if let Some(client) = client {
            query = query.filter(entity::event::Column::Client.eq(client));
        }
        if uninvoiced_only {
            query = query.filter(entity::event::Column::Invoiced.eq(false));
        }

        self.with_names(query.all(self.db).await?).await
    }

    /// # Returns
    /// - `Ok(Some(Event))` - Updated event
    /// - `Ok(None)` - No event with that ID
    pub async fn update(&self, id: i32, params: UpdateEventParams) -> Result<Option<Event>, DbErr> {
        let Some(entity) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.title = ActiveValue::Set(params.title);
        active.client = ActiveValue::Set(params.client);
        active.color = ActiveValue::Set(params.color);
        active.completed = ActiveValue::Set(params.completed);
        apply_billing(&mut active, params.billing);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        self.single_with_names(entity).await.map(Some)
    }

    pub async fn set_completed(&self, id: i32, completed: bool) -> Result<Option<Event>, DbErr> {
        let Some(entity) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.completed = ActiveValue::Set(completed);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        self.single_with_names(entity).await.map(Some)
    }

    /// Deletes an event, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn single_with_names(&self, entity: entity::event::Model) -> Result<Event, DbErr> {
        let id = entity.id;
        self.with_names(vec![entity])
            .await?
            .pop()
            .ok_or(DbErr::RecordNotFound(format!("Event {} not found", id)))
    }

    async fn with_names(&self, entities: Vec<entity::event::Model>) -> Result<Vec<Event>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let employee_ids: Vec<i32> = entities.iter().map(|e| e.employee_id).collect();
        let company_ids: Vec<i32> = entities.iter().map(|e| e.company_id).collect();

        let employees: HashMap<i32, String> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(employee_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, format!("{} {}", u.first_name, u.last_name)))
            .collect();

        let companies: HashMap<i32, String> = entity::prelude::Company::find()
            .filter(entity::company::Column::Id.is_in(company_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        Ok(entities
            .into_iter()
            .map(|entity| {
                let employee_name = employees.get(&entity.employee_id).cloned();
                let company_name = companies.get(&entity.company_id).cloned();
                Event::from_entity(entity, employee_name, company_name)
            })
            .collect())
    }
}

fn in_window(start: DateTime<Utc>, end: DateTime<Utc>) -> Select<entity::event::Entity> {
    entity::prelude::Event::find()
        .filter(entity::event::Column::Start.gte(start))
        .filter(entity::event::Column::Start.lt(end))
        .order_by_asc(entity::event::Column::Start)
}

fn apply_billing(active: &mut entity::event::ActiveModel, billing: Billing) {
    active.start = ActiveValue::Set(billing.start);
    active.end = ActiveValue::Set(billing.end);
    active.hours = ActiveValue::Set(billing.hours);
    active.rate = ActiveValue::Set(billing.rate);
    active.amount = ActiveValue::Set(billing.amount);
}
