use chrono::{Datelike, Utc};
use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::month_name,
        model::{auth::AuthContext, error::ApiError},
    },
    model::{
        calendar::{upcoming_sessions, EmployeeStats},
        event::EventDto,
    },
};

use super::{StatCard, UpcomingList};

#[cfg(feature = "web")]
use crate::client::api::event::get_events;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[component]
pub fn EmployeeDashboard() -> Element {
    let auth_context = use_context::<AuthContext>();
    let now = Utc::now();
    let (year, month) = (now.year(), now.month());

    let mut events = use_signal(|| None::<Vec<EventDto>>);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move { get_events(year, month).await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(list) => {
                    events.set(Some(list.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch sessions: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    let first_name = auth_context
        .read()
        .user()
        .map(|user| user.first_name.clone())
        .unwrap_or_default();
    let company_name = auth_context
        .read()
        .user()
        .and_then(|user| user.company.as_ref().map(|company| company.name.clone()));

    rsx! {
        if let Some(list) = events() {
            Page {
                div {
                    class: "flex flex-col gap-6 max-w-5xl",
                    div {
                        h1 { class: "text-2xl font-bold", "Hi {first_name}" }
                        p {
                            class: "opacity-70",
                            match company_name {
                                Some(name) => rsx! { "Your sessions for {name} in {month_name(month)}" },
                                None => rsx! { "You have not joined a company yet. Join one from your profile." },
                            }
                        }
                    }
                    {
                        let stats = EmployeeStats::from_events(&list, now);
                        rsx! {
                            div {
                                class: "grid gap-4 md:grid-cols-3",
                                StatCard { title: "Hours this month", value: format!("{:.1}", stats.total_hours) }
                                StatCard { title: "Completed sessions", value: stats.completed.to_string() }
                                StatCard { title: "Upcoming sessions", value: stats.upcoming.to_string() }
                            }
                        }
                    }
                    UpcomingList { sessions: upcoming_sessions(&list, now, 5) }
                }
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage {}
        }
    }
}
