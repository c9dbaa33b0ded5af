use chrono::{Datelike, Utc};
use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, MonthNav, Page},
        constant::SITE_NAME,
        model::{auth::AuthContext, error::ApiError, form::text_of},
        route::dashboard::{money, StatCard},
        router::Route,
    },
    model::{
        calendar::{recent_sessions, BusinessMetrics, EmployeeStats},
        event::EventDto,
        user::UserDto,
    },
};

#[cfg(feature = "web")]
use crate::client::api::{company::get_employees, event::get_events};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[derive(Clone, PartialEq)]
struct EmployeeMonth {
    employee: Option<UserDto>,
    events: Vec<EventDto>,
}

/// One employee's month as their employer sees it.
#[component]
pub fn EmployeeView(id: i32) -> Element {
    let auth_context = use_context::<AuthContext>();
    let now = Utc::now();
    let year = use_signal(|| now.year());
    let month = use_signal(|| now.month());
    let company_id = auth_context.read().company_id();

    let mut data = use_signal(|| None::<EmployeeMonth>);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let (year, month) = (year(), month());
        let Some(company_id) = company_id else {
            return Err(ApiError {
                status: 404,
                message: "No company linked to this account".to_string(),
            });
        };

        let employee = get_employees(company_id)
            .await?
            .into_iter()
            .find(|employee| employee.id == id);
        let events = get_events(year, month)
            .await?
            .into_iter()
            .filter(|event| event.employee_id == id)
            .collect();
        Ok(EmployeeMonth { employee, events })
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(month_data) => {
                    data.set(Some(month_data.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch employee {}: {}", id, err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        Title { "Employee | {SITE_NAME}" }
        if let Some(month_data) = data() {
            if let Some(employee) = month_data.employee.clone() {
                Page {
                    div {
                        class: "flex flex-col gap-6 max-w-6xl",
                        div {
                            class: "flex flex-wrap justify-between items-center gap-4",
                            div {
                                h1 { class: "text-2xl font-bold", {employee.full_name()} }
                                p { class: "opacity-70", {text_of(&employee.profile.position)} }
                            }
                            div {
                                class: "flex items-center gap-2",
                                MonthNav { year, month }
                                Link { to: Route::Employees {}, class: "btn btn-ghost btn-sm", "All employees" }
                            }
                        }
                        {
                            let metrics = BusinessMetrics::for_month(&month_data.events, std::slice::from_ref(&employee), year(), month());
                            let stats = EmployeeStats::from_events(&month_data.events, now);
                            rsx! {
                                div {
                                    class: "grid gap-4 md:grid-cols-4",
                                    StatCard { title: "Revenue", value: money(metrics.total_revenue) }
                                    StatCard { title: "Hours", value: format!("{:.1}", metrics.total_hours) }
                                    StatCard {
                                        title: "Completed sessions",
                                        value: metrics.completed_sessions.to_string(),
                                        hint: format!("{} upcoming", stats.upcoming),
                                    }
                                    StatCard { title: "Clients served", value: metrics.unique_clients.to_string() }
                                }
                            }
                        }
                        div {
                            class: "grid gap-4 md:grid-cols-2",
                            EmployeeInfo { employee: employee.clone() }
                            RecentSessions { sessions: recent_sessions(&month_data.events, 5) }
                        }
                    }
                }
            } else {
                ErrorPage { status: 404, message: "Employee not found".to_string() }
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage {}
        }
    }
}

#[component]
fn EmployeeInfo(employee: UserDto) -> Element {
    let rate = employee
        .profile
        .hourly_rate
        .map(money)
        .unwrap_or_else(|| "No rate set".to_string());

    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "Employee information" }
                p { span { class: "font-semibold", "Email: " } "{employee.email}" }
                p { span { class: "font-semibold", "Phone: " } {text_of(&employee.profile.phone)} }
                p { span { class: "font-semibold", "Department: " } {text_of(&employee.profile.department)} }
                p { span { class: "font-semibold", "Hourly rate: " } "{rate}" }
            }
        }
    )
}

#[component]
fn RecentSessions(sessions: Vec<EventDto>) -> Element {
    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "Recent sessions" }
                if sessions.is_empty() {
                    p { class: "opacity-60", "No sessions this month." }
                }
                ul {
                    class: "divide-y divide-base-300",
                    for session in sessions {
                        li {
                            key: "{session.id}",
                            class: "py-2 flex justify-between gap-4",
                            div {
                                p { class: "font-semibold", "{session.title}" }
                                p {
                                    class: "text-sm opacity-70",
                                    {format!("{} · {}", session.client, session.start.format("%a %d %b"))}
                                }
                            }
                            if session.completed {
                                span { class: "badge badge-success", "Completed" }
                            } else {
                                span { class: "badge badge-ghost", "Upcoming" }
                            }
                        }
                    }
                }
            }
        }
    )
}
