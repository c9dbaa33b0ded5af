//! Invoice data repository, including line items.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::{
    model::invoice::InvoiceStatus,
    server::model::invoice::{CreateInvoiceParams, Invoice},
};

pub struct InvoiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvoiceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a draft invoice with its items and flags the billed sessions as invoiced.
    ///
    /// All writes happen in a single transaction; nothing is stored if any insert fails.
    ///
    /// # Returns
    /// - `Ok(Invoice)` - The stored invoice with items
    /// - `Err(DbErr)` - Database error, including a unique violation on the invoice number
    pub async fn create(&self, params: CreateInvoiceParams) -> Result<Invoice, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let invoice = entity::invoice::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            client_id: ActiveValue::Set(params.client_id),
            invoice_number: ActiveValue::Set(params.invoice_number),
            date: ActiveValue::Set(params.date),
            due_date: ActiveValue::Set(params.due_date),
            subtotal: ActiveValue::Set(params.totals.subtotal),
            tax: ActiveValue::Set(params.totals.tax),
            total: ActiveValue::Set(params.totals.total),
            notes: ActiveValue::Set(params.notes),
            status: ActiveValue::Set(InvoiceStatus::Draft.as_str().to_string()),
            sent_at: ActiveValue::Set(None),
            paid_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for item in params.items {
            entity::invoice_item::ActiveModel {
                invoice_id: ActiveValue::Set(invoice.id),
                date: ActiveValue::Set(item.date),
                description: ActiveValue::Set(item.description),
                hours: ActiveValue::Set(item.hours),
                rate: ActiveValue::Set(item.rate),
                amount: ActiveValue::Set(item.amount),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        if !params.event_ids.is_empty() {
            entity::prelude::Event::update_many()
                .col_expr(entity::event::Column::Invoiced, Expr::value(true))
                .filter(entity::event::Column::Id.is_in(params.event_ids))
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        self.find_by_id(invoice.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Invoice with id {} not found after creation",
            invoice.id
        )))
    }

    pub async fn number_exists(&self, invoice_number: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Invoice::find()
            .filter(entity::invoice::Column::InvoiceNumber.eq(invoice_number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Invoice>, DbErr> {
        match entity::prelude::Invoice::find_by_id(id).one(self.db).await? {
            Some(entity) => Ok(self.load(vec![entity]).await?.pop()),
            None => Ok(None),
        }
    }

    /// A user's invoices, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Invoice>, DbErr> {
        let entities = entity::prelude::Invoice::find()
            .filter(entity::invoice::Column::UserId.eq(user_id))
            .order_by_desc(entity::invoice::Column::CreatedAt)
            .order_by_desc(entity::invoice::Column::Id)
            .all(self.db)
            .await?;

        self.load(entities).await
    }

    /// Stores a new status, stamping `sent_at` or `paid_at` with `at` where it applies.
    ///
    /// # Returns
    /// - `Ok(Some(Invoice))` - Updated invoice
    /// - `Ok(None)` - No invoice with that ID
    pub async fn set_status(
        &self,
        id: i32,
        status: InvoiceStatus,
        at: DateTime<Utc>,
    ) -> Result<Option<Invoice>, DbErr> {
        let Some(entity) = entity::prelude::Invoice::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(status.as_str().to_string());
        match status {
            InvoiceStatus::Sent => active.sent_at = ActiveValue::Set(Some(at)),
            InvoiceStatus::Paid => active.paid_at = ActiveValue::Set(Some(at)),
            InvoiceStatus::Draft | InvoiceStatus::Overdue => {}
        }
        active.updated_at = ActiveValue::Set(at);

        let entity = active.update(self.db).await?;

        Ok(self.load(vec![entity]).await?.pop())
    }

    /// Deletes an invoice and its items, returning whether the invoice existed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::InvoiceItem::delete_many()
            .filter(entity::invoice_item::Column::InvoiceId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Invoice::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Attaches items and client names to invoice rows, keeping their order.
    async fn load(&self, entities: Vec<entity::invoice::Model>) -> Result<Vec<Invoice>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let invoice_ids: Vec<i32> = entities.iter().map(|i| i.id).collect();
        let client_ids: Vec<i32> = entities.iter().filter_map(|i| i.client_id).collect();

        let mut items: HashMap<i32, Vec<entity::invoice_item::Model>> = HashMap::new();
        for item in entity::prelude::InvoiceItem::find()
            .filter(entity::invoice_item::Column::InvoiceId.is_in(invoice_ids))
            .order_by_asc(entity::invoice_item::Column::Id)
            .all(self.db)
            .await?
        {
            items.entry(item.invoice_id).or_default().push(item);
        }

        let clients: HashMap<i32, String> = if client_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Client::find()
                .filter(entity::client::Column::Id.is_in(client_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.id, c.name))
                .collect()
        };

        entities
            .into_iter()
            .map(|entity| {
                let invoice_items = items.remove(&entity.id).unwrap_or_default();
                let client_name = entity.client_id.and_then(|id| clients.get(&id).cloned());
                Invoice::from_entity(entity, invoice_items, client_name)
            })
            .collect()
    }
}
