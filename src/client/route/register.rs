use dioxus::prelude::*;

use crate::{
    client::{
        component::{CompanyFields, Page},
        constant::SITE_NAME,
        model::{auth::AuthContext, form::parse_amount},
        router::Route,
    },
    model::{
        company::CompanyDataDto,
        user::{ProfileDto, RegisterDto, Role},
    },
};

#[cfg(feature = "web")]
use crate::client::api::auth::register;

/// Checks the form before it is sent; the server repeats these checks.
fn build_payload(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    confirm: &str,
    role: Role,
    hourly_rate: &str,
    company: &CompanyDataDto,
) -> Result<RegisterDto, String> {
    if first_name.trim().is_empty() || last_name.trim().is_empty() || email.trim().is_empty() {
        return Err("Name and email are required".to_string());
    }
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }

    let company_data = match role {
        Role::Employer => {
            if company.name.trim().is_empty()
                || company.email.trim().is_empty()
                || company.phone.trim().is_empty()
            {
                return Err("Company name, email and phone are required".to_string());
            }
            Some(company.clone())
        }
        Role::Employee => None,
    };

    Ok(RegisterDto {
        email: email.trim().to_string(),
        password: password.to_string(),
        first_name: first_name.trim().to_string(),
        last_name: last_name.trim().to_string(),
        role,
        profile: ProfileDto {
            hourly_rate: parse_amount(hourly_rate)?,
            ..Default::default()
        },
        company_data,
    })
}

#[component]
pub fn Register() -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut role = use_signal(|| Role::Employee);
    let mut hourly_rate = use_signal(String::new);
    let company = use_signal(CompanyDataDto::default);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    use_effect(move || {
        if auth_context.read().is_authenticated() {
            nav.push(Route::Dashboard {});
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let payload = match build_payload(
            &first_name(),
            &last_name(),
            &email(),
            &password(),
            &confirm(),
            role(),
            &hourly_rate(),
            &company.read(),
        ) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);

        #[cfg(feature = "web")]
        {
            let mut auth_context = auth_context;
            submitting.set(true);
            spawn(async move {
                match register(payload).await {
                    Ok(response) => {
                        auth_context.login(response);
                        nav.push(Route::Dashboard {});
                    }
                    Err(err) => error.set(Some(err.message)),
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = payload;
    };

    rsx! {
        Title { "Register | {SITE_NAME}" }
        Page {
            class: "flex items-center justify-center",
            div {
                class: "card bg-base-200 w-full max-w-2xl",
                form {
                    class: "card-body gap-3",
                    onsubmit: on_submit,
                    h1 { class: "card-title text-2xl", "Create your account" }
                    if let Some(message) = error() {
                        div { role: "alert", class: "alert alert-error", "{message}" }
                    }
                    div {
                        class: "join w-full",
                        button {
                            r#type: "button",
                            class: if role() == Role::Employee { "btn join-item flex-1 btn-primary" } else { "btn join-item flex-1" },
                            onclick: move |_| role.set(Role::Employee),
                            "I am an employee"
                        }
                        button {
                            r#type: "button",
                            class: if role() == Role::Employer { "btn join-item flex-1 btn-primary" } else { "btn join-item flex-1" },
                            onclick: move |_| role.set(Role::Employer),
                            "I run a business"
                        }
                    }
                    div {
                        class: "grid gap-3 md:grid-cols-2",
                        label {
                            class: "form-control",
                            span { class: "label-text mb-1", "First name" }
                            input {
                                class: "input input-bordered w-full",
                                value: "{first_name}",
                                oninput: move |e| first_name.set(e.value()),
                            }
                        }
                        label {
                            class: "form-control",
                            span { class: "label-text mb-1", "Last name" }
                            input {
                                class: "input input-bordered w-full",
                                value: "{last_name}",
                                oninput: move |e| last_name.set(e.value()),
                            }
                        }
                        label {
                            class: "form-control",
                            span { class: "label-text mb-1", "Email" }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "email",
                                value: "{email}",
                                oninput: move |e| email.set(e.value()),
                            }
                        }
                        label {
                            class: "form-control",
                            span { class: "label-text mb-1", "Hourly rate (optional)" }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "number",
                                step: "0.01",
                                min: "0",
                                value: "{hourly_rate}",
                                oninput: move |e| hourly_rate.set(e.value()),
                            }
                        }
                        label {
                            class: "form-control",
                            span { class: "label-text mb-1", "Password" }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "password",
                                value: "{password}",
                                oninput: move |e| password.set(e.value()),
                            }
                        }
                        label {
                            class: "form-control",
                            span { class: "label-text mb-1", "Confirm password" }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "password",
                                value: "{confirm}",
                                oninput: move |e| confirm.set(e.value()),
                            }
                        }
                    }
                    if role() == Role::Employer {
                        h2 { class: "font-semibold text-lg mt-2", "Your company" }
                        CompanyFields { data: company }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary mt-2",
                        disabled: submitting(),
                        if submitting() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Create account"
                    }
                    p {
                        class: "text-sm text-center",
                        "Already registered? "
                        Link { to: Route::Login {}, class: "link link-primary", "Log in" }
                    }
                }
            }
        }
    }
}
