use dioxus::prelude::*;

use crate::client::{
    component::{page::LoadingPage, Page},
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[cfg(feature = "web")]
use crate::{client::api::auth::login, model::user::LoginDto};

#[component]
pub fn Login() -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    use_effect(move || {
        if auth_context.read().is_authenticated() {
            nav.push(Route::Dashboard {});
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        if email().trim().is_empty() || password().is_empty() {
            error.set(Some("Email and password are required".to_string()));
            return;
        }

        #[cfg(feature = "web")]
        {
            let mut auth_context = auth_context;
            let payload = LoginDto {
                email: email().trim().to_string(),
                password: password(),
            };
            submitting.set(true);
            spawn(async move {
                match login(payload).await {
                    Ok(response) => {
                        auth_context.login(response);
                        nav.push(Route::Dashboard {});
                    }
                    Err(err) => error.set(Some(err.message)),
                }
                submitting.set(false);
            });
        }
    };

    let initializing = matches!(*auth_context.read(), AuthState::Initializing);

    rsx! {
        Title { "Login | {SITE_NAME}" }
        if initializing {
            LoadingPage {}
        } else {
            Page {
                class: "flex items-center justify-center",
                div {
                    class: "card bg-base-200 w-full max-w-md",
                    form {
                        class: "card-body gap-4",
                        onsubmit: on_submit,
                        h1 { class: "card-title text-2xl", "Welcome back" }
                        if let Some(message) = error() {
                            div { role: "alert", class: "alert alert-error", "{message}" }
                        }
                        label {
                            class: "form-control w-full",
                            span { class: "label-text mb-1", "Email" }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "email",
                                value: "{email}",
                                oninput: move |e| email.set(e.value()),
                            }
                        }
                        label {
                            class: "form-control w-full",
                            span { class: "label-text mb-1", "Password" }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "password",
                                value: "{password}",
                                oninput: move |e| password.set(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: submitting(),
                            if submitting() {
                                span { class: "loading loading-spinner loading-sm" }
                            }
                            "Log in"
                        }
                        p {
                            class: "text-sm text-center",
                            "No account yet? "
                            Link { to: Route::Register {}, class: "link link-primary", "Register" }
                        }
                    }
                }
            }
        }
    }
}
