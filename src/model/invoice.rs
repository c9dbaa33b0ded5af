//! Invoice DTOs and the arithmetic behind invoice generation.
//!
//! Line items are built from completed sessions for one client and month. Totals are plain
//! `f64` sums; rounding to two decimals only happens when formatting.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::{
    calendar::{is_in_month, shift_month, Session},
    client::ClientDto,
    company::CompanyDto,
};

/// Flat VAT applied to every invoice.
pub const TAX_RATE: f64 = 0.15;

/// Hourly rate used when neither the session nor the client carries one.
pub const DEFAULT_HOURLY_RATE: f64 = 75.0;

/// A session that can be billed to a client.
pub trait Billable: Session {
    fn client_name(&self) -> &str;
    fn description(&self) -> &str;
    fn rate(&self) -> Option<f64>;
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 4] = [Self::Draft, Self::Sent, Self::Paid, Self::Overdue];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" => Some(Self::Draft),
            "sent" => Some(Self::Sent),
            "paid" => Some(Self::Paid),
            "overdue" => Some(Self::Overdue),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct InvoiceItemDto {
    pub date: Option<NaiveDate>,
    pub description: String,
    pub hours: f64,
    pub rate: f64,
    pub amount: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct InvoiceDto {
    pub id: i32,
    pub invoice_number: String,
    pub client_id: Option<i32>,
    pub client_name: Option<String>,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub items: Vec<InvoiceItemDto>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub notes: Option<String>,
    /// Effective status: sent invoices past their due date read as overdue.
    pub status: InvoiceStatus,
    pub sent_at: Option<DateTime<Utc>>,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Unsaved invoice for a client and month, as shown by the generator before printing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct InvoicePreviewDto {
    pub invoice_number: String,
    pub company: CompanyDto,
    pub client: ClientDto,
    pub year: i32,
    pub month: u32,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub items: Vec<InvoiceItemDto>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GenerateInvoiceDto {
    pub client_id: i32,
    pub year: i32,
    pub month: u32,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateInvoiceItemDto {
    pub date: Option<NaiveDate>,
    pub description: String,
    pub hours: f64,
    pub rate: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateInvoiceDto {
    pub client_id: Option<i32>,
    pub due_date: NaiveDate,
    pub items: Vec<CreateInvoiceItemDto>,
    pub notes: Option<String>,
}

impl CreateInvoiceItemDto {
    pub fn into_item(self) -> InvoiceItemDto {
        InvoiceItemDto {
            amount: self.hours * self.rate,
            date: self.date,
            description: self.description,
            hours: self.hours,
            rate: self.rate,
        }
    }
}

/// Milliseconds between start and end expressed in hours.
pub fn event_duration_hours(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / 3_600_000.0
}

/// Line items for a client's completed sessions in a month, ordered by start.
///
/// Each item bills the session's own rate, falling back to `client_rate` and then to
/// [`DEFAULT_HOURLY_RATE`].
pub fn build_line_items<E: Billable>(
    events: &[E],
    client_name: &str,
    year: i32,
    month: u32,
    client_rate: Option<f64>,
) -> Vec<InvoiceItemDto> {
    let mut billable: Vec<&E> = events
        .iter()
        .filter(|event| {
            event.completed()
                && event.client_name() == client_name
                && is_in_month(*event, year, month)
        })
        .collect();
    billable.sort_by_key(|event| event.start());

    billable
        .into_iter()
        .map(|event| {
            let hours = event.duration_hours();
            let rate = event
                .rate()
                .or(client_rate)
                .unwrap_or(DEFAULT_HOURLY_RATE);

            InvoiceItemDto {
                date: Some(event.start().date_naive()),
                description: event.description().to_string(),
                hours,
                rate,
                amount: hours * rate,
            }
        })
        .collect()
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct InvoiceTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl InvoiceTotals {
    pub fn from_items(items: &[InvoiceItemDto]) -> Self {
        let subtotal: f64 = items.iter().map(|item| item.amount).sum();
        let tax = subtotal * TAX_RATE;

        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

/// `INV-{first three letters of the client, upper-cased}-{YYYY}{MM}`.
pub fn invoice_number_for(client_name: &str, year: i32, month: u32) -> String {
    let prefix: String = client_name.chars().take(3).collect::<String>().to_uppercase();
    format!("INV-{}-{:04}{:02}", prefix, year, month)
}

/// `INV-{YY}{MM}-{suffix:03}` for invoices entered by hand.
pub fn generated_invoice_number(today: NaiveDate, suffix: u32) -> String {
    format!(
        "INV-{:02}{:02}-{:03}",
        today.year().rem_euclid(100),
        today.month(),
        suffix % 1000
    )
}

/// Invoices for a month fall due on the first day of the following month.
pub fn due_date_for(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = shift_month(year, month, 1)?;
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
}

pub fn effective_status(status: InvoiceStatus, due_date: NaiveDate, today: NaiveDate) -> InvoiceStatus {
    match status {
        InvoiceStatus::Sent if due_date < today => InvoiceStatus::Overdue,
        status => status,
    }
}

pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct StatusTotals {
    pub count: usize,
    pub amount: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct InvoiceStatsDto {
    pub total_count: usize,
    pub total_amount: f64,
    pub draft: StatusTotals,
    pub sent: StatusTotals,
    pub paid: StatusTotals,
    pub overdue: StatusTotals,
}

impl InvoiceStatsDto {
    pub fn from_invoices(invoices: &[InvoiceDto], today: NaiveDate) -> Self {
        invoices.iter().fold(Self::default(), |mut stats, invoice| {
            stats.total_count += 1;
            stats.total_amount += invoice.total;

            let bucket = match effective_status(invoice.status, invoice.due_date, today) {
                InvoiceStatus::Draft => &mut stats.draft,
                InvoiceStatus::Sent => &mut stats.sent,
                InvoiceStatus::Paid => &mut stats.paid,
                InvoiceStatus::Overdue => &mut stats.overdue,
            };
            bucket.count += 1;
            bucket.amount += invoice.total;

            stats
        })
    }
}

/// Invoices matching `status` (all when `None`) whose number, client name or notes contain
/// `search`, ignoring case.
pub fn filter_invoices(
    invoices: &[InvoiceDto],
    status: Option<InvoiceStatus>,
    search: &str,
) -> Vec<InvoiceDto> {
    let needle = search.trim().to_lowercase();

    invoices
        .iter()
        .filter(|invoice| status.is_none_or(|status| invoice.status == status))
        .filter(|invoice| {
            needle.is_empty()
                || invoice.invoice_number.to_lowercase().contains(&needle)
                || invoice
                    .client_name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&needle))
                || invoice
                    .notes
                    .as_deref()
                    .is_some_and(|notes| notes.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
