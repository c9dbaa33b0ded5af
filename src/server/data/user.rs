//! User data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::{
    model::user::ProfileDto,
    server::{
        data::company::CompanyRepository,
        model::{
            company::{Company, SaveCompanyParams},
            user::{CreateUserParams, UpdateProfileParams, User},
        },
    },
};

/// Works over a pooled connection or an open transaction.
pub struct UserRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user without a company.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            company_id: ActiveValue::Set(None),
            phone: ActiveValue::Set(params.profile.phone),
            position: ActiveValue::Set(params.profile.position),
            department: ActiveValue::Set(params.profile.department),
            hourly_rate: ActiveValue::Set(params.profile.hourly_rate),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Looks a user up by already normalised email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Users belonging to a company, ordered by last then first name.
    pub async fn get_by_company(&self, company_id: i32) -> Result<Vec<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::CompanyId.eq(company_id))
            .order_by_asc(entity::user::Column::LastName)
            .order_by_asc(entity::user::Column::FirstName)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Links a user to a company, merging in whichever profile fields are provided.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that ID
    pub async fn join_company(
        &self,
        user_id: i32,
        company_id: i32,
        profile: ProfileDto,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(user_id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.company_id = ActiveValue::Set(Some(company_id));
        if profile.phone.is_some() {
            active.phone = ActiveValue::Set(profile.phone);
        }
        if profile.position.is_some() {
            active.position = ActiveValue::Set(profile.position);
        }
        if profile.department.is_some() {
            active.department = ActiveValue::Set(profile.department);
        }
        if profile.hourly_rate.is_some() {
            active.hourly_rate = ActiveValue::Set(profile.hourly_rate);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        User::from_entity(entity).map(Some)
    }

    /// Replaces a user's name and profile fields.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that ID
    pub async fn update_profile(
        &self,
        user_id: i32,
        params: UpdateProfileParams,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(user_id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.first_name = ActiveValue::Set(params.first_name);
        active.last_name = ActiveValue::Set(params.last_name);
        active.phone = ActiveValue::Set(params.profile.phone);
        active.position = ActiveValue::Set(params.profile.position);
        active.department = ActiveValue::Set(params.profile.department);
        active.hourly_rate = ActiveValue::Set(params.profile.hourly_rate);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        User::from_entity(entity).map(Some)
    }
}

impl<'a> UserRepository<'a, DatabaseConnection> {
    /// Inserts an employer together with the company they own, in one transaction.
    ///
    /// # Returns
    /// - `Ok((User, Company))` - The created user, linked to the created company
    /// - `Err(DbErr)` - Database error; neither row is kept
    pub async fn create_with_company(
        &self,
        params: CreateUserParams,
        company: SaveCompanyParams,
    ) -> Result<(User, Company), DbErr> {
        let txn = self.db.begin().await?;

        let mut user = UserRepository::new(&txn).create(params).await?;
        let company = CompanyRepository::new(&txn).create(user.id, company).await?;

        txn.commit().await?;

        user.company_id = Some(company.id);
        Ok((user, company))
    }
}
