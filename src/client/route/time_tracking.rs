use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use dioxus::prelude::*;

use crate::{
    client::{
        component::{Banner, ErrorPage, LoadingPage, Notice, Page},
        constant::SITE_NAME,
        model::{auth::AuthContext, error::ApiError},
        route::dashboard::{money, StatCard},
    },
    model::{
        client::ClientDto,
        time_entry::{hours_in_week, total_hours, CreateTimeEntryDto, TimeEntryDto},
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    client::get_clients,
    time_entry::{create_time_entry, get_time_entries},
};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

const DATE_INPUT: &str = "%Y-%m-%d";

#[derive(Clone, PartialEq)]
struct TrackingData {
    entries: Vec<TimeEntryDto>,
    clients: Vec<ClientDto>,
}

#[derive(Clone, Debug, PartialEq, Default)]
struct TimeEntryForm {
    client_id: String,
    date: String,
    hours: String,
    description: String,
}

impl TimeEntryForm {
    fn for_day(day: NaiveDate) -> Self {
        Self {
            date: day.format(DATE_INPUT).to_string(),
            ..Default::default()
        }
    }

    fn to_dto(&self) -> Result<CreateTimeEntryDto, String> {
        let hours = match self.hours.trim().parse::<f64>() {
            Ok(hours) if hours.is_finite() && hours > 0.0 => hours,
            _ => return Err("Hours must be greater than zero".to_string()),
        };
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_INPUT)
            .map_err(|_| "Pick a date".to_string())?;
        let client_id = match self.client_id.trim() {
            "" => None,
            id => Some(id.parse::<i32>().map_err(|_| "Pick a client".to_string())?),
        };

        Ok(CreateTimeEntryDto {
            client_id,
            description: self.description.trim().to_string(),
            hours,
            date,
        })
    }
}

#[component]
pub fn TimeTracking() -> Element {
    let auth_context = use_context::<AuthContext>();
    let company_id = auth_context.read().company_id();
    let today = Utc::now().date_naive();

    let mut data = use_signal(|| None::<TrackingData>);
    let mut error = use_signal(|| None::<ApiError>);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut notice = use_signal(|| None::<Notice>);

    let mut form = use_signal(|| TimeEntryForm::for_day(today));
    let mut form_error = use_signal(|| None::<String>);
    let mut is_saving = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        let entries = get_time_entries().await?;
        let clients = match company_id {
            Some(_) => get_clients().await?,
            None => Vec::new(),
        };
        Ok::<_, ApiError>(TrackingData { entries, clients })
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(tracking) => {
                    data.set(Some(tracking.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch time entries: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    let on_save = move |evt: FormEvent| {
        evt.prevent_default();

        let dto = match form.read().to_dto() {
            Ok(dto) => dto,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        form_error.set(None);

        #[cfg(feature = "web")]
        {
            is_saving.set(true);
            spawn(async move {
                match create_time_entry(dto).await {
                    Ok(_) => {
                        form.set(TimeEntryForm::for_day(today));
                        notice.set(Some(Notice::Success("Time entry added".to_string())));
                        refetch_trigger.set(refetch_trigger() + 1);
                    }
                    Err(err) => form_error.set(Some(err.message)),
                }
                is_saving.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = dto;
    };

    let current_form = form();

    rsx! {
        Title { "Time Tracking | {SITE_NAME}" }
        if let Some(tracking) = data() {
            {
                let rates: HashMap<i32, (String, f64)> = tracking
                    .clients
                    .iter()
                    .map(|client| (client.id, (client.name.clone(), client.hourly_rate)))
                    .collect();
                let mut entries = tracking.entries.clone();
                entries.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

                rsx! {
                    Page {
                        div {
                            class: "flex flex-col gap-6 max-w-5xl",
                            Banner { notice }
                            div {
                                h1 { class: "text-2xl font-bold", "Time tracking" }
                                p { class: "opacity-70", "Log hours worked outside scheduled sessions." }
                            }
                            div {
                                class: "grid gap-4 md:grid-cols-3",
                                StatCard { title: "This week", value: format!("{:.1} h", hours_in_week(&tracking.entries, today)) }
                                StatCard {
                                    title: "All time",
                                    value: format!("{:.1} h", total_hours(&tracking.entries)),
                                    hint: format!("{} entries", tracking.entries.len()),
                                }
                                StatCard { title: "Clients", value: tracking.clients.len().to_string() }
                            }
                            div {
                                class: "card bg-base-200",
                                form {
                                    class: "card-body gap-3",
                                    onsubmit: on_save,
                                    h2 { class: "card-title", "Add time entry" }
                                    if let Some(message) = form_error() {
                                        div { role: "alert", class: "alert alert-error", "{message}" }
                                    }
                                    div {
                                        class: "grid gap-3 md:grid-cols-4",
                                        select {
                                            class: "select select-bordered w-full",
                                            onchange: move |e| form.write().client_id = e.value(),
                                            option { value: "", selected: current_form.client_id.is_empty(), "No client" }
                                            for client in tracking.clients.clone() {
                                                option {
                                                    key: "{client.id}",
                                                    value: "{client.id}",
                                                    selected: current_form.client_id == client.id.to_string(),
                                                    "{client.name}"
                                                }
                                            }
                                        }
                                        input {
                                            class: "input input-bordered w-full",
                                            r#type: "date",
                                            value: current_form.date.clone(),
                                            oninput: move |e| form.write().date = e.value(),
                                        }
                                        input {
                                            class: "input input-bordered w-full",
                                            r#type: "number",
                                            step: "0.25",
                                            min: "0",
                                            placeholder: "Hours worked",
                                            value: current_form.hours.clone(),
                                            oninput: move |e| form.write().hours = e.value(),
                                        }
                                        input {
                                            class: "input input-bordered w-full",
                                            placeholder: "Description of work",
                                            value: current_form.description.clone(),
                                            oninput: move |e| form.write().description = e.value(),
                                        }
                                    }
                                    div {
                                        class: "card-actions justify-end",
                                        button {
                                            r#type: "submit",
                                            class: "btn btn-primary",
                                            disabled: is_saving(),
                                            if is_saving() {
                                                span { class: "loading loading-spinner loading-sm" }
                                            }
                                            "Add time entry"
                                        }
                                    }
                                }
                            }
                            if entries.is_empty() {
                                p { class: "opacity-60", "No time logged yet." }
                            } else {
                                div {
                                    class: "overflow-x-auto card bg-base-200",
                                    table {
                                        class: "table",
                                        thead {
                                            tr {
                                                th { "Date" }
                                                th { "Client" }
                                                th { "Description" }
                                                th { class: "text-right", "Hours" }
                                                th { class: "text-right", "Value" }
                                            }
                                        }
                                        tbody {
                                            for entry in entries {
                                                {
                                                    let client = entry.client_id.and_then(|id| rates.get(&id).cloned());
                                                    let client_name = client.as_ref().map(|(name, _)| name.clone()).unwrap_or_else(|| "-".to_string());
                                                    let value = client
                                                        .map(|(_, rate)| money(entry.hours * rate))
                                                        .unwrap_or_else(|| "-".to_string());
                                                    rsx! {
                                                        tr {
                                                            key: "{entry.id}",
                                                            td { {entry.date.format("%Y-%m-%d").to_string()} }
                                                            td { "{client_name}" }
                                                            td { "{entry.description}" }
                                                            td { class: "text-right", {format!("{:.2}", entry.hours)} }
                                                            td { class: "text-right", "{value}" }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
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
