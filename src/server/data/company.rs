//! Company data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::company::{Company, SaveCompanyParams};

/// Works over a pooled connection or an open transaction.
pub struct CompanyRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompanyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a company owned by `owner_id` and links the owner to it.
    pub async fn create(&self, owner_id: i32, params: SaveCompanyParams) -> Result<Company, DbErr> {
        let now = Utc::now();
        let mut active = entity::company::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        };
        apply_params(&mut active, params);

        let entity = active.insert(self.db).await?;

        entity::prelude::User::update_many()
            .col_expr(entity::user::Column::CompanyId, Expr::value(entity.id))
            .filter(entity::user::Column::Id.eq(owner_id))
            .exec(self.db)
            .await?;

        Ok(Company::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Company>, DbErr> {
        let entity = entity::prelude::Company::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Company::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Company>, DbErr> {
        let entities = entity::prelude::Company::find()
            .order_by_asc(entity::company::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Company::from_entity).collect())
    }

    /// Companies whose name or email contains `query`.
    ///
    /// SQLite's `LIKE` ignores ASCII case, which gives the case-insensitive match.
    pub async fn search(&self, query: &str) -> Result<Vec<Company>, DbErr> {
        let query = query.trim();

        let entities = entity::prelude::Company::find()
            .filter(
                Condition::any()
                    .add(entity::company::Column::Name.contains(query))
                    .add(entity::company::Column::Email.contains(query)),
            )
            .order_by_asc(entity::company::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Company::from_entity).collect())
    }

    /// Whether another company than `except_id` already uses `email`.
    pub async fn email_taken(&self, email: &str, except_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Company::find().filter(entity::company::Column::Email.eq(email));
        if let Some(id) = except_id {
            query = query.filter(entity::company::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Replaces a company's details.
    ///
    /// # Returns
    /// - `Ok(Some(Company))` - Updated company
    /// - `Ok(None)` - No company with that ID
    pub async fn update(
        &self,
        id: i32,
        params: SaveCompanyParams,
    ) -> Result<Option<Company>, DbErr> {
        let Some(entity) = entity::prelude::Company::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        apply_params(&mut active, params);

        let entity = active.update(self.db).await?;

        Ok(Some(Company::from_entity(entity)))
    }
}

fn apply_params(active: &mut entity::company::ActiveModel, params: SaveCompanyParams) {
    active.name = ActiveValue::Set(params.name);
    active.email = ActiveValue::Set(params.email);
    active.phone = ActiveValue::Set(params.phone);
    active.registration_number = ActiveValue::Set(params.registration_number);
    active.vat_number = ActiveValue::Set(params.vat_number);
    active.industry = ActiveValue::Set(params.industry);
    active.size = ActiveValue::Set(params.size);
    active.street = ActiveValue::Set(params.address.street);
    active.city = ActiveValue::Set(params.address.city);
    active.state = ActiveValue::Set(params.address.state);
    active.zip_code = ActiveValue::Set(params.address.zip_code);
    active.country = ActiveValue::Set(params.address.country);
    active.bank_name = ActiveValue::Set(params.banking.bank_name);
    active.account_holder = ActiveValue::Set(params.banking.account_holder);
    active.account_number = ActiveValue::Set(params.banking.account_number);
    active.branch_code = ActiveValue::Set(params.banking.branch_code);
    active.account_type = ActiveValue::Set(params.banking.account_type);
    active.updated_at = ActiveValue::Set(Utc::now());
}
