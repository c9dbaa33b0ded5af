use dioxus::prelude::*;

use crate::{
    client::{
        component::{Banner, CompanyFields, ErrorPage, LoadingPage, Notice, Page},
        constant::SITE_NAME,
        model::{auth::AuthContext, error::ApiError},
    },
    model::company::{CompanyDataDto, CompanyDto},
};

#[cfg(feature = "web")]
use crate::client::api::company::{get_company, update_company};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

fn company_data(company: &CompanyDto) -> CompanyDataDto {
    CompanyDataDto {
        name: company.name.clone(),
        email: company.email.clone(),
        phone: company.phone.clone(),
        registration_number: company.registration_number.clone(),
        vat_number: company.vat_number.clone(),
        industry: company.industry.clone(),
        size: company.size.clone(),
        address: company.address.clone(),
        banking: company.banking.clone(),
    }
}

/// Company details printed on every invoice.
#[component]
pub fn Settings() -> Element {
    let auth_context = use_context::<AuthContext>();
    let company_id = auth_context.read().company_id();

    let mut data = use_signal(CompanyDataDto::default);
    let mut loaded = use_signal(|| false);
    let mut error = use_signal(|| None::<ApiError>);
    let mut notice = use_signal(|| None::<Notice>);
    let mut is_saving = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        match company_id {
            Some(id) => get_company(id).await,
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
                Ok(detail) => {
                    data.set(company_data(&detail.company));
                    loaded.set(true);
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch company: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let payload = data();
        if payload.name.trim().is_empty() || payload.email.trim().is_empty() {
            notice.set(Some(Notice::Error("Company name and email are required".to_string())));
            return;
        }

        #[cfg(feature = "web")]
        if let Some(id) = company_id {
            let mut auth_context = auth_context;
            is_saving.set(true);
            spawn(async move {
                match update_company(id, payload).await {
                    Ok(company) => {
                        let user = auth_context.read().user().cloned();
                        if let Some(mut user) = user {
                            user.company = Some(company);
                            auth_context.update_user(user);
                        }
                        notice.set(Some(Notice::Success("Company details saved".to_string())));
                    }
                    Err(err) => notice.set(Some(Notice::Error(err.message))),
                }
                is_saving.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = payload;
    };

    rsx! {
        Title { "Settings | {SITE_NAME}" }
        if loaded() {
            Page {
                div {
                    class: "max-w-3xl",
                    Banner { notice }
                    h1 { class: "text-2xl font-bold mb-6", "Company settings" }
                    form {
                        class: "card bg-base-200",
                        onsubmit: on_submit,
                        div {
                            class: "card-body",
                            CompanyFields { data }
                            div {
                                class: "card-actions justify-end mt-4",
                                button {
                                    r#type: "submit",
                                    class: "btn btn-primary",
                                    disabled: is_saving(),
                                    if is_saving() {
                                        span { class: "loading loading-spinner loading-sm" }
                                    }
                                    "Save changes"
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
