use chrono::{Duration, NaiveDate, Utc};
use dioxus::prelude::*;

use crate::{
    client::{
        component::Modal,
        model::form::{optional_text, parse_amount, parse_datetime_local, to_datetime_local},
    },
    model::{
        client::ClientDto,
        event::{CreateEventDto, EventDto, UpdateEventDto},
        user::UserDto,
    },
};

pub const DEFAULT_COLOR: &str = "#3b82f6";

/// Text state of the session form.
#[derive(Clone, Debug, PartialEq)]
pub struct EventForm {
    pub title: String,
    pub client: String,
    pub start: String,
    pub end: String,
    pub color: String,
    pub rate: String,
    pub employee_id: Option<i32>,
    pub completed: bool,
}

impl EventForm {
    /// One hour session from 09:00 on `date`.
    pub fn for_day(date: NaiveDate) -> Self {
        let start = date.and_hms_opt(9, 0, 0).unwrap_or_default().and_utc();
        Self {
            title: String::new(),
            client: String::new(),
            start: to_datetime_local(start),
            end: to_datetime_local(start + Duration::hours(1)),
            color: DEFAULT_COLOR.to_string(),
            rate: String::new(),
            employee_id: None,
            completed: false,
        }
    }

    pub fn from_event(event: &EventDto) -> Self {
        Self {
            title: event.title.clone(),
            client: event.client.clone(),
            start: to_datetime_local(event.start),
            end: to_datetime_local(event.end),
            color: event.color.clone().unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            rate: event.rate.to_string(),
            employee_id: Some(event.employee_id),
            completed: event.completed,
        }
    }

    fn validated(&self) -> Result<CreateEventDto, String> {
        if self.title.trim().is_empty() || self.client.trim().is_empty() {
            return Err("Title and client are required".to_string());
        }
        let start = parse_datetime_local(&self.start)?;
        let end = parse_datetime_local(&self.end)?;
        if end <= start {
            return Err("End time must be after start time".to_string());
        }

        Ok(CreateEventDto {
            title: self.title.trim().to_string(),
            client: self.client.trim().to_string(),
            start,
            end,
            color: optional_text(&self.color),
            completed: None,
            rate: parse_amount(&self.rate)?,
            employee_id: self.employee_id,
        })
    }

    pub fn to_create_dto(&self) -> Result<CreateEventDto, String> {
        self.validated()
    }

    pub fn to_update_dto(&self) -> Result<UpdateEventDto, String> {
        let dto = self.validated()?;

        Ok(UpdateEventDto {
            title: dto.title,
            client: dto.client,
            start: dto.start,
            end: dto.end,
            color: dto.color,
            completed: self.completed,
            rate: dto.rate,
        })
    }
}

/// What the modal asks the calendar page to do.
#[derive(Clone, Debug, PartialEq)]
pub enum EventAction {
    Save,
    Complete,
    Delete,
}

#[component]
pub fn EventModal(
    show: Signal<bool>,
    mut form: Signal<EventForm>,
    editing: Option<EventDto>,
    clients: Vec<ClientDto>,
    employees: Vec<UserDto>,
    error: Option<String>,
    is_processing: bool,
    on_action: EventHandler<EventAction>,
) -> Element {
    let title = if editing.is_some() { "Edit session" } else { "New session" };
    let current = form();
    let can_complete = editing.as_ref().is_some_and(|event| !event.completed);
    let in_past = parse_datetime_local(&current.start).is_ok_and(|start| start < Utc::now());

    rsx!(
        Modal {
            show,
            title: title.to_string(),
            prevent_close: is_processing,
            form {
                class: "flex flex-col gap-3",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_action.call(EventAction::Save);
                },
                if let Some(message) = error {
                    div { role: "alert", class: "alert alert-error", "{message}" }
                }
                label {
                    class: "form-control",
                    span { class: "label-text mb-1", "Title" }
                    input {
                        class: "input input-bordered w-full",
                        value: "{current.title}",
                        oninput: move |e| form.write().title = e.value(),
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label-text mb-1", "Client" }
                    input {
                        class: "input input-bordered w-full",
                        list: "client-options",
                        value: "{current.client}",
                        oninput: move |e| form.write().client = e.value(),
                    }
                    datalist {
                        id: "client-options",
                        for client in clients {
                            option { key: "{client.id}", value: "{client.name}" }
                        }
                    }
                }
                if !employees.is_empty() && editing.is_none() {
                    label {
                        class: "form-control",
                        span { class: "label-text mb-1", "Employee" }
                        select {
                            class: "select select-bordered w-full",
                            onchange: move |e| form.write().employee_id = e.value().parse().ok(),
                            option { value: "", selected: current.employee_id.is_none(), "Myself" }
                            for employee in employees {
                                option {
                                    key: "{employee.id}",
                                    value: "{employee.id}",
                                    selected: current.employee_id == Some(employee.id),
                                    {employee.full_name()}
                                }
                            }
                        }
                    }
                }
                div {
                    class: "grid grid-cols-2 gap-3",
                    label {
                        class: "form-control",
                        span { class: "label-text mb-1", "Start" }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "datetime-local",
                            value: "{current.start}",
                            oninput: move |e| form.write().start = e.value(),
                        }
                    }
                    label {
                        class: "form-control",
                        span { class: "label-text mb-1", "End" }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "datetime-local",
                            value: "{current.end}",
                            oninput: move |e| form.write().end = e.value(),
                        }
                    }
                    label {
                        class: "form-control",
                        span { class: "label-text mb-1", "Hourly rate" }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "number",
                            step: "0.01",
                            min: "0",
                            placeholder: "Default",
                            value: "{current.rate}",
                            oninput: move |e| form.write().rate = e.value(),
                        }
                    }
                    label {
                        class: "form-control",
                        span { class: "label-text mb-1", "Colour" }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "color",
                            value: "{current.color}",
                            oninput: move |e| form.write().color = e.value(),
                        }
                    }
                }
                if editing.is_some() {
                    label {
                        class: "label cursor-pointer justify-start gap-2",
                        input {
                            r#type: "checkbox",
                            class: "checkbox",
                            checked: current.completed,
                            onchange: move |e| form.write().completed = e.checked(),
                        }
                        span { "Completed" }
                    }
                } else if in_past {
                    p { class: "text-sm opacity-70", "Sessions that already started are saved as completed." }
                }
                div {
                    class: "modal-action flex-wrap",
                    if editing.is_some() {
                        button {
                            r#type: "button",
                            class: "btn btn-error btn-outline mr-auto",
                            disabled: is_processing,
                            onclick: move |_| on_action.call(EventAction::Delete),
                            "Delete"
                        }
                    }
                    if can_complete {
                        button {
                            r#type: "button",
                            class: "btn btn-success",
                            disabled: is_processing,
                            onclick: move |_| on_action.call(EventAction::Complete),
                            "Mark complete"
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_processing,
                        if is_processing {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Save"
                    }
                }
            }
        }
    )
}
