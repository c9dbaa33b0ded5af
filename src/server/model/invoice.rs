//! Invoice domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::invoice::{
        effective_status, InvoiceDto, InvoiceItemDto, InvoicePreviewDto, InvoiceStatus,
        InvoiceTotals,
    },
    server::model::{client::Client, company::Company},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: i32,
    pub user_id: i32,
    pub client_id: Option<i32>,
    pub client_name: Option<String>,
    pub invoice_number: String,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub items: Vec<InvoiceItemDto>,
    pub totals: InvoiceTotals,
    pub notes: Option<String>,
    /// Status as stored; see [`Invoice::effective_status`].
    pub status: InvoiceStatus,
    pub sent_at: Option<DateTime<Utc>>,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    /// Converts an invoice row with its items and client name.
    ///
    /// # Returns
    /// - `Err(DbErr::Custom)` - Stored status is not a known invoice status
    pub fn from_entity(
        entity: entity::invoice::Model,
        items: Vec<entity::invoice_item::Model>,
        client_name: Option<String>,
    ) -> Result<Self, DbErr> {
        let status = InvoiceStatus::parse(&entity.status).ok_or_else(|| {
            DbErr::Custom(format!("Invalid stored invoice status '{}'", entity.status))
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            client_id: entity.client_id,
            client_name,
            invoice_number: entity.invoice_number,
            date: entity.date,
            due_date: entity.due_date,
            items: items
                .into_iter()
                .map(|item| InvoiceItemDto {
                    date: item.date,
                    description: item.description,
                    hours: item.hours,
                    rate: item.rate,
                    amount: item.amount,
                })
                .collect(),
            totals: InvoiceTotals {
                subtotal: entity.subtotal,
                tax: entity.tax,
                total: entity.total,
            },
            notes: entity.notes,
            status,
            sent_at: entity.sent_at,
            paid_at: entity.paid_at,
            created_at: entity.created_at,
        })
    }

    pub fn effective_status(&self, today: NaiveDate) -> InvoiceStatus {
        effective_status(self.status, self.due_date, today)
    }

    /// Converts to a DTO reporting the effective status as of `today`.
    pub fn into_dto(self, today: NaiveDate) -> InvoiceDto {
        let status = self.effective_status(today);
        InvoiceDto {
            id: self.id,
            invoice_number: self.invoice_number,
            client_id: self.client_id,
            client_name: self.client_name,
            date: self.date,
            due_date: self.due_date,
            items: self.items,
            subtotal: self.totals.subtotal,
            tax: self.totals.tax,
            total: self.totals.total,
            notes: self.notes,
            status,
            sent_at: self.sent_at,
            paid_at: self.paid_at,
            created_at: self.created_at,
        }
    }
}

/// Everything needed to persist an invoice in one transaction.
#[derive(Debug, Clone)]
pub struct CreateInvoiceParams {
    pub user_id: i32,
    pub client_id: Option<i32>,
    pub invoice_number: String,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub items: Vec<InvoiceItemDto>,
    pub totals: InvoiceTotals,
    pub notes: Option<String>,
    /// Sessions billed by this invoice; flagged as invoiced on insert.
    pub event_ids: Vec<i32>,
}

/// Unsaved invoice for a client's completed sessions in one month.
#[derive(Debug, Clone)]
pub struct InvoiceDraft {
    pub company: Company,
    pub client: Client,
    pub year: i32,
    pub month: u32,
    pub invoice_number: String,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub items: Vec<InvoiceItemDto>,
    pub totals: InvoiceTotals,
    /// Sessions the items were built from.
    pub event_ids: Vec<i32>,
}

impl InvoiceDraft {
    pub fn into_preview_dto(self) -> InvoicePreviewDto {
        InvoicePreviewDto {
            invoice_number: self.invoice_number,
            company: self.company.into_dto(),
            client: self.client.into_dto(),
            year: self.year,
            month: self.month,
            date: self.date,
            due_date: self.due_date,
            items: self.items,
            subtotal: self.totals.subtotal,
            tax: self.totals.tax,
            total: self.totals.total,
        }
    }
}
