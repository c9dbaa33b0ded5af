use dioxus::prelude::*;

use crate::{
    client::{
        component::{Banner, ConfirmationModal, ErrorPage, LoadingPage, Notice, Page},
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
    },
    model::{
        client::ClientDto,
        invoice::{InvoiceDto, InvoiceStatsDto, InvoiceStatus, StatusTotals},
    },
};

use super::{manual::ManualInvoiceModal, money, status_badge};

#[cfg(feature = "web")]
use crate::client::api::{
    client::get_clients,
    invoice::{delete_invoice, get_invoice_stats, get_invoices, mark_invoice_paid, print_invoice, send_invoice},
};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

const STATUS_FILTERS: [(&str, &str); 5] = [
    ("all", "All"),
    ("draft", "Draft"),
    ("sent", "Sent"),
    ("paid", "Paid"),
    ("overdue", "Overdue"),
];

#[derive(Clone, Copy, Debug, PartialEq)]
enum InvoiceAction {
    Send,
    MarkPaid,
    Print,
}

#[component]
pub fn AllInvoices() -> Element {
    let mut status = use_signal(|| "all".to_string());
    let mut search = use_signal(String::new);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut notice = use_signal(|| None::<Notice>);

    let mut invoices = use_signal(|| None::<Vec<InvoiceDto>>);
    let mut stats = use_signal(InvoiceStatsDto::default);
    let mut clients = use_signal(Vec::<ClientDto>::new);
    let mut error = use_signal(|| None::<ApiError>);

    let show_manual = use_signal(|| false);
    let mut show_delete = use_signal(|| false);
    let mut to_delete = use_signal(|| None::<InvoiceDto>);
    let mut is_deleting = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_invoices(status(), search()).await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(list) => {
                    invoices.set(Some(list.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch invoices: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    #[cfg(feature = "web")]
    use_future(move || async move {
        let _ = refetch_trigger();
        match get_invoice_stats().await {
            Ok(summary) => stats.set(summary),
            Err(err) => tracing::warn!("Failed to fetch invoice summary: {}", err),
        }
    });

    #[cfg(feature = "web")]
    use_future(move || async move {
        if let Ok(list) = get_clients().await {
            clients.set(list);
        }
    });

    let on_action = move |(action, invoice): (InvoiceAction, InvoiceDto)| {
        #[cfg(feature = "web")]
        spawn(async move {
            let result = match action {
                InvoiceAction::Send => send_invoice(invoice.id)
                    .await
                    .map(|sent| Some(format!("Invoice {} marked as sent", sent.invoice_number))),
                InvoiceAction::MarkPaid => mark_invoice_paid(invoice.id)
                    .await
                    .map(|paid| Some(format!("Invoice {} marked as paid", paid.invoice_number))),
                InvoiceAction::Print => print_invoice(invoice.id).await.map(|_| None),
            };

            match result {
                Ok(Some(message)) => {
                    notice.set(Some(Notice::Success(message)));
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Ok(None) => {}
                Err(err) => notice.set(Some(Notice::Error(err.message))),
            }
        });
        #[cfg(not(feature = "web"))]
        let _ = (action, invoice);
    };

    let on_delete = move |_: ()| {
        let Some(invoice) = to_delete() else {
            return;
        };

        #[cfg(feature = "web")]
        {
            is_deleting.set(true);
            spawn(async move {
                match delete_invoice(invoice.id).await {
                    Ok(response) => {
                        notice.set(Some(Notice::Success(response.message)));
                        refetch_trigger.set(refetch_trigger() + 1);
                    }
                    Err(err) => notice.set(Some(Notice::Error(err.message))),
                }
                show_delete.set(false);
                is_deleting.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = invoice;
    };

    let summary = stats();
    let delete_message = to_delete()
        .map(|invoice| format!("Delete invoice {}? This cannot be undone.", invoice.invoice_number))
        .unwrap_or_default();

    rsx! {
        Title { "Invoices | {SITE_NAME}" }
        Page {
            div {
                class: "flex flex-col gap-6 max-w-6xl",
                Banner { notice }
                div {
                    class: "flex flex-wrap justify-between items-center gap-4",
                    h1 { class: "text-2xl font-bold", "All invoices" }
                    div {
                        class: "flex gap-2",
                        Link { to: Route::Invoices {}, class: "btn btn-ghost", "Generator" }
                        button {
                            class: "btn btn-primary",
                            onclick: {
                                let mut show_manual = show_manual;
                                move |_| show_manual.set(true)
                            },
                            "New invoice"
                        }
                    }
                }
                div {
                    class: "grid gap-4 md:grid-cols-5",
                    SummaryCard { label: "Total", totals: StatusTotals { count: summary.total_count, amount: summary.total_amount } }
                    SummaryCard { label: "Draft", totals: summary.draft }
                    SummaryCard { label: "Sent", totals: summary.sent }
                    SummaryCard { label: "Paid", totals: summary.paid }
                    SummaryCard { label: "Overdue", totals: summary.overdue }
                }
                div {
                    class: "flex flex-wrap gap-4",
                    select {
                        class: "select select-bordered",
                        onchange: move |e| status.set(e.value()),
                        for (value, label) in STATUS_FILTERS {
                            option { value, selected: status() == value, "{label}" }
                        }
                    }
                    input {
                        class: "input input-bordered flex-1 min-w-64",
                        placeholder: "Search by number, client or notes",
                        value: "{search}",
                        oninput: move |e| search.set(e.value()),
                    }
                }
                if let Some(list) = invoices() {
                    InvoiceTable {
                        invoices: list,
                        on_action,
                        on_delete: move |invoice: InvoiceDto| {
                            to_delete.set(Some(invoice));
                            show_delete.set(true);
                        },
                    }
                } else if let Some(err) = error() {
                    ErrorPage { status: err.status, message: err.message }
                } else {
                    LoadingPage {}
                }
            }
        }
        ManualInvoiceModal {
            show: show_manual,
            clients: clients(),
            on_created: move |invoice: InvoiceDto| {
                notice.set(Some(Notice::Success(format!("Invoice {} created", invoice.invoice_number))));
                refetch_trigger.set(refetch_trigger() + 1);
            },
        }
        ConfirmationModal {
            show: show_delete,
            title: "Delete invoice".to_string(),
            message: delete_message,
            is_processing: is_deleting(),
            on_confirm: on_delete,
        }
    }
}

#[component]
fn SummaryCard(label: &'static str, totals: StatusTotals) -> Element {
    rsx!(
        div {
            class: "stat bg-base-200 rounded-box",
            div { class: "stat-title", "{label}" }
            div { class: "stat-value text-xl", {money(totals.amount)} }
            div { class: "stat-desc", "{totals.count} invoices" }
        }
    )
}

#[component]
fn InvoiceTable(
    invoices: Vec<InvoiceDto>,
    on_action: EventHandler<(InvoiceAction, InvoiceDto)>,
    on_delete: EventHandler<InvoiceDto>,
) -> Element {
    if invoices.is_empty() {
        return rsx!(p { class: "opacity-60", "No invoices match." });
    }

    rsx!(
        div {
            class: "overflow-x-auto card bg-base-200",
            table {
                class: "table",
                thead {
                    tr {
                        th { "Number" }
                        th { "Client" }
                        th { "Date" }
                        th { "Due" }
                        th { "Status" }
                        th { class: "text-right", "Total" }
                        th {}
                    }
                }
                tbody {
                    for invoice in invoices {
                        tr {
                            key: "{invoice.id}",
                            td { class: "font-mono", "{invoice.invoice_number}" }
                            td { {invoice.client_name.clone().unwrap_or_else(|| "-".to_string())} }
                            td { "{invoice.date}" }
                            td { "{invoice.due_date}" }
                            td {
                                span { class: status_badge(invoice.status), {invoice.status.as_str()} }
                            }
                            td { class: "text-right", {money(invoice.total)} }
                            td {
                                class: "flex gap-1 justify-end",
                                button {
                                    class: "btn btn-xs",
                                    onclick: {
                                        let invoice = invoice.clone();
                                        move |_| on_action.call((InvoiceAction::Print, invoice.clone()))
                                    },
                                    "Print"
                                }
                                if invoice.status == InvoiceStatus::Draft {
                                    button {
                                        class: "btn btn-xs btn-info",
                                        onclick: {
                                            let invoice = invoice.clone();
                                            move |_| on_action.call((InvoiceAction::Send, invoice.clone()))
                                        },
                                        "Send"
                                    }
                                }
                                if invoice.status != InvoiceStatus::Paid {
                                    button {
                                        class: "btn btn-xs btn-success",
                                        onclick: {
                                            let invoice = invoice.clone();
                                            move |_| on_action.call((InvoiceAction::MarkPaid, invoice.clone()))
                                        },
                                        "Mark paid"
                                    }
                                }
                                button {
                                    class: "btn btn-xs btn-error btn-outline",
                                    onclick: {
                                        let invoice = invoice.clone();
                                        move |_| on_delete.call(invoice.clone())
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
