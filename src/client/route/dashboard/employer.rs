use chrono::{Datelike, Utc};
use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, MonthNav, Page},
        model::{auth::AuthContext, error::ApiError},
    },
    model::{
        calendar::{employee_performance, upcoming_sessions, BusinessMetrics, EmployeePerformance},
        event::EventDto,
        user::UserDto,
    },
};

use super::{money, StatCard, UpcomingList};

#[cfg(feature = "web")]
use crate::client::api::{company::get_employees, event::get_events};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[derive(Clone, PartialEq)]
struct CompanyMonth {
    events: Vec<EventDto>,
    employees: Vec<UserDto>,
}

#[component]
pub fn EmployerDashboard() -> Element {
    let auth_context = use_context::<AuthContext>();
    let now = Utc::now();
    let year = use_signal(|| now.year());
    let month = use_signal(|| now.month());
    let company_id = auth_context.read().company_id();

    let mut data = use_signal(|| None::<CompanyMonth>);
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

        let events = get_events(year, month).await?;
        let employees = get_employees(company_id).await?;
        Ok(CompanyMonth { events, employees })
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
                    tracing::error!("Failed to fetch company month: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        if let Some(month_data) = data() {
            Page {
                div {
                    class: "flex flex-col gap-6 max-w-6xl",
                    div {
                        class: "flex flex-wrap justify-between items-center gap-4",
                        h1 { class: "text-2xl font-bold", "Business overview" }
                        MonthNav { year, month }
                    }
                    {
                        let metrics = BusinessMetrics::for_month(&month_data.events, &month_data.employees, year(), month());
                        rsx! {
                            div {
                                class: "grid gap-4 md:grid-cols-4",
                                StatCard { title: "Revenue", value: money(metrics.total_revenue), hint: "Completed sessions".to_string() }
                                StatCard { title: "Hours", value: format!("{:.1}", metrics.total_hours) }
                                StatCard { title: "Clients served", value: metrics.unique_clients.to_string() }
                                StatCard {
                                    title: "Active employees",
                                    value: format!("{} / {}", metrics.active_employees, month_data.employees.len()),
                                    hint: format!("{} sessions", metrics.completed_sessions),
                                }
                            }
                        }
                    }
                    PerformanceTable {
                        rows: employee_performance(&month_data.events, &month_data.employees, year(), month())
                    }
                    UpcomingList {
                        sessions: upcoming_sessions(&month_data.events, now, 8),
                        show_employee: true,
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

#[component]
fn PerformanceTable(rows: Vec<EmployeePerformance>) -> Element {
    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "Employee performance" }
                if rows.is_empty() {
                    p { class: "opacity-60", "No employees have joined your company yet." }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table",
                            thead {
                                tr {
                                    th { "Employee" }
                                    th { class: "text-right", "Rate" }
                                    th { class: "text-right", "Sessions" }
                                    th { class: "text-right", "Hours" }
                                    th { class: "text-right", "Revenue" }
                                }
                            }
                            tbody {
                                for row in rows {
                                    tr {
                                        key: "{row.employee_id}",
                                        td { "{row.name}" }
                                        td { class: "text-right", {money(row.hourly_rate)} }
                                        td { class: "text-right", "{row.sessions}" }
                                        td { class: "text-right", {format!("{:.1}", row.hours)} }
                                        td { class: "text-right", {money(row.revenue)} }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
