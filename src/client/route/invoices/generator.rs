use chrono::{Datelike, Utc};
use dioxus::prelude::*;

use crate::{
    client::{
        component::{Banner, ErrorPage, LoadingPage, MonthNav, Notice, Page},
        constant::{month_name, SITE_NAME},
        model::{error::ApiError, form::optional_text},
        router::Route,
    },
    model::{
        client::ClientDto,
        invoice::{GenerateInvoiceDto, InvoiceDto, InvoicePreviewDto},
    },
};

use super::ItemsTable;

#[cfg(feature = "web")]
use crate::client::api::{
    client::get_clients,
    invoice::{generate_invoice, preview_invoice, print_invoice},
};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

/// Builds a month's invoice for one client from their completed sessions.
#[component]
pub fn Invoices() -> Element {
    let now = Utc::now();
    let year = use_signal(|| now.year());
    let month = use_signal(|| now.month());

    let mut clients = use_signal(|| None::<Vec<ClientDto>>);
    let mut error = use_signal(|| None::<ApiError>);
    let mut client_id = use_signal(|| None::<i32>);
    let mut notes = use_signal(String::new);
    let mut notice = use_signal(|| None::<Notice>);

    let mut preview = use_signal(|| None::<InvoicePreviewDto>);
    let mut generated = use_signal(|| None::<InvoiceDto>);
    let mut is_loading = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move { get_clients().await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(list) => {
                    clients.set(Some(list.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch clients: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    // A new selection invalidates whatever was previewed
    use_effect(move || {
        let _ = (client_id(), year(), month());
        preview.set(None);
        generated.set(None);
    });

    let on_preview = move |_| {
        let Some(id) = client_id() else {
            notice.set(Some(Notice::Error("Select a client first".to_string())));
            return;
        };

        #[cfg(feature = "web")]
        {
            is_loading.set(true);
            spawn(async move {
                match preview_invoice(id, year(), month()).await {
                    Ok(result) => preview.set(Some(result)),
                    Err(err) => {
                        preview.set(None);
                        notice.set(Some(Notice::Error(err.message)));
                    }
                }
                is_loading.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = id;
    };

    let on_generate = move |_| {
        let Some(id) = client_id() else {
            return;
        };
        let payload = GenerateInvoiceDto {
            client_id: id,
            year: year(),
            month: month(),
            notes: optional_text(&notes()),
        };

        #[cfg(feature = "web")]
        {
            is_loading.set(true);
            spawn(async move {
                match generate_invoice(payload).await {
                    Ok(invoice) => {
                        notice.set(Some(Notice::Success(format!(
                            "Invoice {} created",
                            invoice.invoice_number
                        ))));
                        preview.set(None);
                        generated.set(Some(invoice));
                    }
                    Err(err) => notice.set(Some(Notice::Error(err.message))),
                }
                is_loading.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = payload;
    };

    let on_print = move |_| {
        let Some(invoice) = generated() else {
            return;
        };

        #[cfg(feature = "web")]
        spawn(async move {
            if let Err(err) = print_invoice(invoice.id).await {
                notice.set(Some(Notice::Error(err.message)));
            }
        });
        #[cfg(not(feature = "web"))]
        let _ = invoice;
    };

    rsx! {
        Title { "Invoice Generator | {SITE_NAME}" }
        if let Some(list) = clients() {
            Page {
                div {
                    class: "flex flex-col gap-6 max-w-5xl",
                    Banner { notice }
                    div {
                        class: "flex justify-between items-center",
                        h1 { class: "text-2xl font-bold", "Invoice generator" }
                        Link { to: Route::AllInvoices {}, class: "btn btn-ghost", "All invoices" }
                    }
                    div {
                        class: "card bg-base-200",
                        div {
                            class: "card-body flex flex-col gap-4",
                            div {
                                class: "flex flex-wrap items-end gap-4",
                                label {
                                    class: "form-control min-w-64",
                                    span { class: "label-text mb-1", "Client" }
                                    select {
                                        class: "select select-bordered",
                                        onchange: move |e| client_id.set(e.value().parse().ok()),
                                        option { value: "", selected: client_id().is_none(), "Select a client" }
                                        for client in list {
                                            option {
                                                key: "{client.id}",
                                                value: "{client.id}",
                                                selected: client_id() == Some(client.id),
                                                "{client.name}"
                                            }
                                        }
                                    }
                                }
                                MonthNav { year, month }
                                button {
                                    class: "btn btn-primary",
                                    disabled: is_loading() || client_id().is_none(),
                                    onclick: on_preview,
                                    "Preview"
                                }
                            }
                            label {
                                class: "form-control",
                                span { class: "label-text mb-1", "Notes (optional)" }
                                textarea {
                                    class: "textarea textarea-bordered",
                                    value: "{notes}",
                                    oninput: move |e| notes.set(e.value()),
                                }
                            }
                        }
                    }
                    if let Some(current) = preview() {
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body",
                                div {
                                    class: "flex flex-wrap justify-between gap-4",
                                    div {
                                        h2 { class: "card-title", "{current.invoice_number}" }
                                        p { class: "opacity-70", "{month_name(current.month)} {current.year}" }
                                        p { "Due {current.due_date}" }
                                    }
                                    div {
                                        class: "text-right",
                                        p { class: "font-semibold", "{current.company.name}" }
                                        p { class: "opacity-70", "Bill to {current.client.name}" }
                                    }
                                }
                                ItemsTable {
                                    items: current.items.clone(),
                                    subtotal: current.subtotal,
                                    tax: current.tax,
                                    total: current.total,
                                }
                                div {
                                    class: "card-actions justify-end",
                                    button {
                                        class: "btn btn-success",
                                        disabled: is_loading(),
                                        onclick: on_generate,
                                        "Generate invoice"
                                    }
                                }
                            }
                        }
                    }
                    if let Some(invoice) = generated() {
                        div {
                            class: "alert flex justify-between",
                            span { "Invoice {invoice.invoice_number} is saved as a draft." }
                            button { class: "btn btn-sm btn-primary", onclick: on_print, "Print / Save PDF" }
                        }
                    }
                }
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage {}
        }
    }
}
