//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users.
///
/// Defaults to an employee without a company and with a placeholder password hash. Tests
/// that log in should set a real hash with [`UserFactory::password_hash`].
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    password_hash: String,
    first_name: String,
    last_name: String,
    role: String,
    company_id: Option<i32>,
    hourly_rate: Option<f64>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"`
    /// - first_name / last_name: `"User"` / `"{id}"`
    /// - role: `"employee"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            password_hash: "unset".to_string(),
            first_name: "User".to_string(),
            last_name: id.to_string(),
            role: "employee".to_string(),
            company_id: None,
            hourly_rate: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Sets the role, `"employer"` or `"employee"`.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn company_id(mut self, company_id: i32) -> Self {
        self.company_id = Some(company_id);
        self
    }

    pub fn hourly_rate(mut self, hourly_rate: f64) -> Self {
        self.hourly_rate = Some(hourly_rate);
        self
    }

    /// Builds and inserts the user entity into the database.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            role: ActiveValue::Set(self.role),
            company_id: ActiveValue::Set(self.company_id),
            phone: ActiveValue::Set(None),
            position: ActiveValue::Set(None),
            department: ActiveValue::Set(None),
            hourly_rate: ActiveValue::Set(self.hourly_rate),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an employee with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
