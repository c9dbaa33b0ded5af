use crate::{
    model::invoice::{InvoiceItemDto, InvoiceStatus, InvoiceTotals},
    server::{data::invoice::InvoiceRepository, model::invoice::CreateInvoiceParams},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_user;
mod set_status;

fn item(description: &str, hours: f64, rate: f64) -> InvoiceItemDto {
    InvoiceItemDto {
        date: NaiveDate::from_ymd_opt(2025, 3, 4),
        description: description.to_string(),
        hours,
        rate,
        amount: hours * rate,
    }
}

fn invoice_params(user_id: i32, invoice_number: &str) -> CreateInvoiceParams {
    let items = vec![item("Algebra", 1.0, 100.0), item("Geometry", 2.0, 50.0)];
    CreateInvoiceParams {
        user_id,
        client_id: None,
        invoice_number: invoice_number.to_string(),
        date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        due_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        totals: InvoiceTotals::from_items(&items),
        items,
        notes: None,
        event_ids: Vec::new(),
    }
}
