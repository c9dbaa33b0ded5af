use chrono::{Duration, NaiveDate, Utc};
use dioxus::prelude::*;

use crate::{
    client::{
        component::Modal,
        model::form::{optional_text, parse_amount},
    },
    model::{
        client::ClientDto,
        invoice::{CreateInvoiceDto, CreateInvoiceItemDto, InvoiceDto},
    },
};

#[cfg(feature = "web")]
use crate::client::api::invoice::create_invoice;

#[derive(Clone, Debug, PartialEq, Default)]
struct ItemRow {
    date: String,
    description: String,
    hours: String,
    rate: String,
}

impl ItemRow {
    fn to_dto(&self, line: usize) -> Result<CreateInvoiceItemDto, String> {
        if self.description.trim().is_empty() {
            return Err(format!("Line {} needs a description", line));
        }
        let hours = parse_amount(&self.hours)?
            .filter(|hours| *hours > 0.0)
            .ok_or_else(|| format!("Line {} needs a positive number of hours", line))?;
        let rate = parse_amount(&self.rate)?.unwrap_or(0.0);
        let date = match self.date.trim() {
            "" => None,
            value => Some(
                NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .map_err(|_| format!("Line {} has an invalid date", line))?,
            ),
        };

        Ok(CreateInvoiceItemDto {
            date,
            description: self.description.trim().to_string(),
            hours,
            rate,
        })
    }
}

fn build_payload(
    client_id: Option<i32>,
    due_date: &str,
    rows: &[ItemRow],
    notes: &str,
) -> Result<CreateInvoiceDto, String> {
    let due_date = NaiveDate::parse_from_str(due_date.trim(), "%Y-%m-%d")
        .map_err(|_| "Pick a due date".to_string())?;
    if rows.is_empty() {
        return Err("Add at least one line".to_string());
    }
    let items = rows
        .iter()
        .enumerate()
        .map(|(index, row)| row.to_dto(index + 1))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CreateInvoiceDto {
        client_id,
        due_date,
        items,
        notes: optional_text(notes),
    })
}

/// Invoice typed in by hand instead of generated from sessions.
#[component]
pub fn ManualInvoiceModal(
    show: Signal<bool>,
    clients: Vec<ClientDto>,
    on_created: EventHandler<InvoiceDto>,
) -> Element {
    let default_due = (Utc::now().date_naive() + Duration::days(30))
        .format("%Y-%m-%d")
        .to_string();

    let mut client_id = use_signal(|| None::<i32>);
    let mut due_date = use_signal(|| default_due);
    let mut rows = use_signal(|| vec![ItemRow::default()]);
    let mut notes = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_saving = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let payload = match build_payload(client_id(), &due_date(), &rows.read(), &notes()) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);

        #[cfg(feature = "web")]
        {
            let mut show = show;
            is_saving.set(true);
            spawn(async move {
                match create_invoice(payload).await {
                    Ok(invoice) => {
                        rows.set(vec![ItemRow::default()]);
                        notes.set(String::new());
                        show.set(false);
                        on_created.call(invoice);
                    }
                    Err(err) => error.set(Some(err.message)),
                }
                is_saving.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = payload;
    };

    let current_rows = rows();
    let row_count = current_rows.len();

    rsx!(
        Modal {
            show,
            title: "New invoice".to_string(),
            prevent_close: is_saving(),
            class: "max-w-3xl",
            form {
                class: "flex flex-col gap-3",
                onsubmit: on_submit,
                if let Some(message) = error() {
                    div { role: "alert", class: "alert alert-error", "{message}" }
                }
                div {
                    class: "grid gap-3 md:grid-cols-2",
                    label {
                        class: "form-control",
                        span { class: "label-text mb-1", "Client" }
                        select {
                            class: "select select-bordered w-full",
                            onchange: move |e| client_id.set(e.value().parse().ok()),
                            option { value: "", selected: client_id().is_none(), "No client" }
                            for client in clients {
                                option {
                                    key: "{client.id}",
                                    value: "{client.id}",
                                    selected: client_id() == Some(client.id),
                                    "{client.name}"
                                }
                            }
                        }
                    }
                    label {
                        class: "form-control",
                        span { class: "label-text mb-1", "Due date" }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "date",
                            value: "{due_date}",
                            oninput: move |e| due_date.set(e.value()),
                        }
                    }
                }
                for (index, row) in current_rows.into_iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "grid grid-cols-12 gap-2 items-end",
                        input {
                            class: "input input-bordered input-sm col-span-3",
                            r#type: "date",
                            value: row.date,
                            oninput: move |e| rows.write()[index].date = e.value(),
                        }
                        input {
                            class: "input input-bordered input-sm col-span-5",
                            placeholder: "Description",
                            value: row.description,
                            oninput: move |e| rows.write()[index].description = e.value(),
                        }
                        input {
                            class: "input input-bordered input-sm col-span-1",
                            r#type: "number",
                            step: "0.25",
                            min: "0",
                            placeholder: "Hrs",
                            value: row.hours,
                            oninput: move |e| rows.write()[index].hours = e.value(),
                        }
                        input {
                            class: "input input-bordered input-sm col-span-2",
                            r#type: "number",
                            step: "0.01",
                            min: "0",
                            placeholder: "Rate",
                            value: row.rate,
                            oninput: move |e| rows.write()[index].rate = e.value(),
                        }
                        button {
                            r#type: "button",
                            class: "btn btn-ghost btn-sm col-span-1",
                            disabled: row_count == 1,
                            onclick: move |_| {
                                rows.write().remove(index);
                            },
                            "✕"
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "btn btn-sm btn-outline self-start",
                    onclick: move |_| rows.write().push(ItemRow::default()),
                    "Add line"
                }
                label {
                    class: "form-control",
                    span { class: "label-text mb-1", "Notes" }
                    textarea {
                        class: "textarea textarea-bordered",
                        value: "{notes}",
                        oninput: move |e| notes.set(e.value()),
                    }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_saving(),
                        if is_saving() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Create invoice"
                    }
                }
            }
        }
    )
}
