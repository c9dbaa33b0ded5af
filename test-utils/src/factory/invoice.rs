//! Invoice factory for creating test invoice entities.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for invoices without line items.
pub struct InvoiceFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    client_id: Option<i32>,
    invoice_number: String,
    due_date: NaiveDate,
    subtotal: f64,
    notes: Option<String>,
    status: String,
}

impl<'a> InvoiceFactory<'a> {
    /// Defaults: draft, subtotal `100.0`, due in 30 days, unique `INV-TEST-{id}` number.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            client_id: None,
            invoice_number: format!("INV-TEST-{}", next_id()),
            due_date: (Utc::now() + Duration::days(30)).date_naive(),
            subtotal: 100.0,
            notes: None,
            status: "draft".to_string(),
        }
    }

    pub fn client_id(mut self, client_id: i32) -> Self {
        self.client_id = Some(client_id);
        self
    }

    pub fn invoice_number(mut self, invoice_number: impl Into<String>) -> Self {
        self.invoice_number = invoice_number.into();
        self
    }

    pub fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = due_date;
        self
    }

    /// Sets the subtotal; tax and total follow at 15%.
    pub fn subtotal(mut self, subtotal: f64) -> Self {
        self.subtotal = subtotal;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::invoice::Model, DbErr> {
        let now = Utc::now();
        let tax = self.subtotal * 0.15;
        entity::invoice::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            client_id: ActiveValue::Set(self.client_id),
            invoice_number: ActiveValue::Set(self.invoice_number),
            date: ActiveValue::Set(now.date_naive()),
            due_date: ActiveValue::Set(self.due_date),
            subtotal: ActiveValue::Set(self.subtotal),
            tax: ActiveValue::Set(tax),
            total: ActiveValue::Set(self.subtotal + tax),
            notes: ActiveValue::Set(self.notes),
            status: ActiveValue::Set(self.status),
            sent_at: ActiveValue::Set(None),
            paid_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_invoice(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::invoice::Model, DbErr> {
    InvoiceFactory::new(db, user_id).build().await
}
