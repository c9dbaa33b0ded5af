mod employee;
mod employer;

use dioxus::prelude::*;

use crate::{
    client::{constant::SITE_NAME, model::auth::AuthContext},
    model::{event::EventDto, invoice::format_money},
};

use employee::EmployeeDashboard;
use employer::EmployerDashboard;

#[component]
pub fn Dashboard() -> Element {
    let auth_context = use_context::<AuthContext>();
    let is_employer = auth_context.read().is_employer();

    rsx! {
        Title { "Dashboard | {SITE_NAME}" }
        if is_employer {
            EmployerDashboard {}
        } else {
            EmployeeDashboard {}
        }
    }
}

#[component]
pub(crate) fn StatCard(title: &'static str, value: String, #[props(default)] hint: String) -> Element {
    rsx!(
        div {
            class: "stat bg-base-200 rounded-box",
            div { class: "stat-title", "{title}" }
            div { class: "stat-value text-2xl", "{value}" }
            if !hint.is_empty() {
                div { class: "stat-desc", "{hint}" }
            }
        }
    )
}

/// Sessions starting within the next week.
#[component]
fn UpcomingList(sessions: Vec<EventDto>, #[props(default)] show_employee: bool) -> Element {
    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "Upcoming sessions" }
                if sessions.is_empty() {
                    p { class: "opacity-60", "Nothing scheduled for the next seven days." }
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
                                    "{session.client}"
                                    if show_employee {
                                        if let Some(name) = session.employee_name.clone() {
                                            " · {name}"
                                        }
                                    }
                                }
                            }
                            div {
                                class: "text-right text-sm",
                                p { {session.start.format("%a %d %b").to_string()} }
                                p {
                                    class: "opacity-70",
                                    {format!("{} - {}", session.start.format("%H:%M"), session.end.format("%H:%M"))}
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

pub(crate) fn money(amount: f64) -> String {
    format!("R {}", format_money(amount))
}
