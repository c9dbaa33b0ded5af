mod all;
mod generator;
mod manual;

use dioxus::prelude::*;

use crate::model::invoice::{format_money, InvoiceItemDto, InvoiceStatus};

pub use all::AllInvoices;
pub use generator::Invoices;

fn money(amount: f64) -> String {
    format!("R {}", format_money(amount))
}

fn status_badge(status: InvoiceStatus) -> &'static str {
    match status {
        InvoiceStatus::Draft => "badge badge-ghost",
        InvoiceStatus::Sent => "badge badge-info",
        InvoiceStatus::Paid => "badge badge-success",
        InvoiceStatus::Overdue => "badge badge-error",
    }
}

/// Line items with the subtotal, 15% VAT and total rows underneath.
#[component]
fn ItemsTable(items: Vec<InvoiceItemDto>, subtotal: f64, tax: f64, total: f64) -> Element {
    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table",
                thead {
                    tr {
                        th { "Date" }
                        th { "Description" }
                        th { class: "text-right", "Hours" }
                        th { class: "text-right", "Rate" }
                        th { class: "text-right", "Amount" }
                    }
                }
                tbody {
                    for (index, item) in items.into_iter().enumerate() {
                        tr {
                            key: "{index}",
                            td { {item.date.map(|date| date.format("%Y-%m-%d").to_string()).unwrap_or_default()} }
                            td { "{item.description}" }
                            td { class: "text-right", {format!("{:.2}", item.hours)} }
                            td { class: "text-right", {money(item.rate)} }
                            td { class: "text-right", {money(item.amount)} }
                        }
                    }
                }
                tfoot {
                    tr {
                        td { colspan: 4, class: "text-right", "Subtotal" }
                        td { class: "text-right", {money(subtotal)} }
                    }
                    tr {
                        td { colspan: 4, class: "text-right", "VAT (15%)" }
                        td { class: "text-right", {money(tax)} }
                    }
                    tr {
                        td { colspan: 4, class: "text-right font-bold", "Total" }
                        td { class: "text-right font-bold", {money(total)} }
                    }
                }
            }
        }
    )
}
