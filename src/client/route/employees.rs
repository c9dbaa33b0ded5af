use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::{auth::AuthContext, error::ApiError, form::text_of},
        router::Route,
    },
    model::{invoice::format_money, user::UserDto},
};

#[cfg(feature = "web")]
use crate::client::api::company::get_employees;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[component]
pub fn Employees() -> Element {
    let auth_context = use_context::<AuthContext>();
    let company_id = auth_context.read().company_id();

    let mut employees = use_signal(|| None::<Vec<UserDto>>);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        match company_id {
            Some(id) => get_employees(id).await,
            None => Err(ApiError {
                status: 404,
                message: "No company linked to this account".to_string(),
            }),
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(list) => {
                    employees.set(Some(list.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch employees: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    let company_name = auth_context
        .read()
        .user()
        .and_then(|user| user.company.as_ref().map(|company| company.name.clone()))
        .unwrap_or_default();

    rsx! {
        Title { "Employees | {SITE_NAME}" }
        if let Some(list) = employees() {
            Page {
                div {
                    class: "max-w-5xl",
                    h1 { class: "text-2xl font-bold", "Employees" }
                    p {
                        class: "opacity-70 mb-6",
                        "Employees join {company_name} from their profile page."
                    }
                    if list.is_empty() {
                        p { class: "opacity-60", "Nobody has joined yet." }
                    } else {
                        div {
                            class: "grid gap-4 md:grid-cols-2",
                            for employee in list {
                                EmployeeCard { key: "{employee.id}", employee }
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

#[component]
fn EmployeeCard(employee: UserDto) -> Element {
    let rate = employee
        .profile
        .hourly_rate
        .map(|rate| format!("R {} / hour", format_money(rate)))
        .unwrap_or_else(|| "No rate set".to_string());
    let position = [&employee.profile.position, &employee.profile.department]
        .into_iter()
        .filter_map(|part| part.clone())
        .collect::<Vec<_>>()
        .join(" · ");

    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", {employee.full_name()} }
                if !position.is_empty() {
                    p { class: "opacity-70", "{position}" }
                }
                p { "{employee.email}" }
                p { {text_of(&employee.profile.phone)} }
                div {
                    class: "card-actions justify-between items-center",
                    div { class: "badge badge-primary badge-outline", "{rate}" }
                    Link {
                        to: Route::EmployeeView { id: employee.id },
                        class: "btn btn-sm btn-primary",
                        "View"
                    }
                }
            }
        }
    )
}
