mod event_form;

use chrono::{Datelike, Utc};
use dioxus::prelude::*;

use crate::{
    client::{
        component::{Banner, ErrorPage, LoadingPage, MonthCalendar, MonthNav, Notice, Page},
        constant::SITE_NAME,
        model::{auth::AuthContext, error::ApiError},
    },
    model::{client::ClientDto, event::EventDto, user::UserDto},
};

use event_form::{EventAction, EventForm, EventModal};

#[cfg(feature = "web")]
use crate::client::api::{
    client::get_clients,
    company::get_employees,
    event::{complete_event, create_event, delete_event, get_events, update_event},
};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

/// Clients and employees offered in the session form.
#[derive(Clone, PartialEq, Default)]
struct FormOptions {
    clients: Vec<ClientDto>,
    employees: Vec<UserDto>,
}

#[component]
pub fn Calendar() -> Element {
    let auth_context = use_context::<AuthContext>();
    let now = Utc::now();
    let year = use_signal(|| now.year());
    let month = use_signal(|| now.month());
    let mut refetch_trigger = use_signal(|| 0u32);

    let mut events = use_signal(|| None::<Vec<EventDto>>);
    let mut error = use_signal(|| None::<ApiError>);
    let mut options = use_signal(FormOptions::default);
    let mut notice = use_signal(|| None::<Notice>);

    let mut show_modal = use_signal(|| false);
    let mut form = use_signal(|| EventForm::for_day(now.date_naive()));
    let mut editing = use_signal(|| None::<EventDto>);
    let mut form_error = use_signal(|| None::<String>);
    let mut is_processing = use_signal(|| false);

    let is_employer = auth_context.read().is_employer();
    let company_id = auth_context.read().company_id();

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_events(year(), month()).await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(list) => {
                    events.set(Some(list.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch calendar: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    // Options are a convenience; the form still accepts any client name
    #[cfg(feature = "web")]
    use_future(move || async move {
        if company_id.is_none() {
            return;
        }
        let clients = get_clients().await.unwrap_or_default();
        let employees = match (is_employer, company_id) {
            (true, Some(id)) => get_employees(id).await.unwrap_or_default(),
            _ => Vec::new(),
        };
        options.set(FormOptions { clients, employees });
    });

    let on_action = move |action: EventAction| {
        form_error.set(None);

        #[cfg(feature = "web")]
        {
            let current = form();
            let target = editing();
            is_processing.set(true);

            spawn(async move {
                let result = match (action, target) {
                    (EventAction::Save, None) => match current.to_create_dto() {
                        Ok(dto) => create_event(dto).await.map(|_| "Session scheduled"),
                        Err(message) => Err(ApiError { status: 400, message }),
                    },
                    (EventAction::Save, Some(event)) => match current.to_update_dto() {
                        Ok(dto) => update_event(event.id, dto).await.map(|_| "Session updated"),
                        Err(message) => Err(ApiError { status: 400, message }),
                    },
                    (EventAction::Complete, Some(event)) => {
                        complete_event(event.id).await.map(|_| "Session completed")
                    }
                    (EventAction::Delete, Some(event)) => {
                        delete_event(event.id).await.map(|_| "Session deleted")
                    }
                    (_, None) => Ok("Nothing to do"),
                };

                match result {
                    Ok(message) => {
                        show_modal.set(false);
                        notice.set(Some(Notice::Success(message.to_string())));
                        refetch_trigger.set(refetch_trigger() + 1);
                    }
                    Err(err) => form_error.set(Some(err.message)),
                }
                is_processing.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = action;
    };

    rsx! {
        Title { "Calendar | {SITE_NAME}" }
        if let Some(list) = events() {
            Page {
                Banner { notice }
                div {
                    class: "flex flex-wrap justify-between items-center gap-4 mb-4",
                    h1 { class: "text-2xl font-bold", "Calendar" }
                    div {
                        class: "flex items-center gap-2",
                        MonthNav { year, month }
                        button {
                            class: "btn btn-primary btn-sm",
                            onclick: move |_| {
                                editing.set(None);
                                form.set(EventForm::for_day(Utc::now().date_naive()));
                                form_error.set(None);
                                show_modal.set(true);
                            },
                            "New session"
                        }
                    }
                }
                MonthCalendar {
                    events: list,
                    year: year(),
                    month: month(),
                    on_select_day: move |date| {
                        editing.set(None);
                        form.set(EventForm::for_day(date));
                        form_error.set(None);
                        show_modal.set(true);
                    },
                    on_select_event: move |event: EventDto| {
                        form.set(EventForm::from_event(&event));
                        editing.set(Some(event));
                        form_error.set(None);
                        show_modal.set(true);
                    },
                }
            }
            EventModal {
                show: show_modal,
                form,
                editing: editing(),
                clients: options().clients,
                employees: options().employees,
                error: form_error(),
                is_processing: is_processing(),
                on_action,
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage {}
        }
    }
}
