//! Company factory for creating test company entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test companies owned by an existing user.
pub struct CompanyFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    email: String,
    bank_name: Option<String>,
}

impl<'a> CompanyFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Company {}", id),
            email: format!("company{}@example.com", id),
            bank_name: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn bank_name(mut self, bank_name: impl Into<String>) -> Self {
        self.bank_name = Some(bank_name.into());
        self
    }

    pub async fn build(self) -> Result<entity::company::Model, DbErr> {
        let now = Utc::now();
        entity::company::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set("000 000 0000".to_string()),
            registration_number: ActiveValue::Set(None),
            vat_number: ActiveValue::Set(None),
            industry: ActiveValue::Set(None),
            size: ActiveValue::Set(None),
            street: ActiveValue::Set(None),
            city: ActiveValue::Set(None),
            state: ActiveValue::Set(None),
            zip_code: ActiveValue::Set(None),
            country: ActiveValue::Set(None),
            bank_name: ActiveValue::Set(self.bank_name),
            account_holder: ActiveValue::Set(None),
            account_number: ActiveValue::Set(None),
            branch_code: ActiveValue::Set(None),
            account_type: ActiveValue::Set(None),
            owner_id: ActiveValue::Set(self.owner_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a company with default values owned by `owner_id`.
pub async fn create_company(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::company::Model, DbErr> {
    CompanyFactory::new(db, owner_id).build().await
}
