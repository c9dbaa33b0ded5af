use dioxus::prelude::*;

use crate::{
    client::{
        component::{Banner, Notice, Page},
        constant::SITE_NAME,
        model::{
            auth::AuthContext,
            form::{optional_text, parse_amount, text_of},
        },
    },
    model::{
        company::CompanyDto,
        user::{ProfileDto, UpdateProfileDto, UserDto},
    },
};

#[cfg(feature = "web")]
use crate::{
    client::api::{
        auth::join_company,
        company::search_companies,
        user::update_profile,
    },
    model::user::JoinCompanyDto,
};

#[derive(Clone, Debug, PartialEq, Default)]
struct ProfileForm {
    first_name: String,
    last_name: String,
    phone: String,
    position: String,
    department: String,
    hourly_rate: String,
}

impl ProfileForm {
    fn from_user(user: &UserDto) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: text_of(&user.profile.phone),
            position: text_of(&user.profile.position),
            department: text_of(&user.profile.department),
            hourly_rate: user
                .profile
                .hourly_rate
                .map(|rate| rate.to_string())
                .unwrap_or_default(),
        }
    }

    fn profile(&self) -> Result<ProfileDto, String> {
        Ok(ProfileDto {
            phone: optional_text(&self.phone),
            position: optional_text(&self.position),
            department: optional_text(&self.department),
            hourly_rate: parse_amount(&self.hourly_rate)?,
        })
    }

    fn to_dto(&self) -> Result<UpdateProfileDto, String> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err("First and last name are required".to_string());
        }

        Ok(UpdateProfileDto {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            profile: self.profile()?,
        })
    }
}

#[component]
pub fn Profile() -> Element {
    let auth_context = use_context::<AuthContext>();
    let user = auth_context.read().user().cloned();
    let mut notice = use_signal(|| None::<Notice>);
    let mut form = use_signal(|| user.as_ref().map(ProfileForm::from_user).unwrap_or_default());
    let mut is_saving = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let payload = match form.read().to_dto() {
            Ok(payload) => payload,
            Err(message) => {
                notice.set(Some(Notice::Error(message)));
                return;
            }
        };

        #[cfg(feature = "web")]
        {
            let mut auth_context = auth_context;
            is_saving.set(true);
            spawn(async move {
                match update_profile(payload).await {
                    Ok(user) => {
                        auth_context.update_user(user);
                        notice.set(Some(Notice::Success("Profile updated".to_string())));
                    }
                    Err(err) => notice.set(Some(Notice::Error(err.message))),
                }
                is_saving.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = payload;
    };

    let Some(user) = user else {
        return rsx!();
    };
    let current = form();
    let needs_company = user.company_id.is_none();

    rsx! {
        Title { "Profile | {SITE_NAME}" }
        Page {
            div {
                class: "flex flex-col gap-6 max-w-3xl",
                Banner { notice }
                div {
                    h1 { class: "text-2xl font-bold", {user.full_name()} }
                    p { class: "opacity-70", "{user.email} · {user.role.as_str()}" }
                    if let Some(company) = user.company.clone() {
                        p { class: "opacity-70", "{company.name}" }
                    }
                }
                if needs_company {
                    JoinCompany { notice, form }
                }
                form {
                    class: "card bg-base-200",
                    onsubmit: on_submit,
                    div {
                        class: "card-body grid gap-3 md:grid-cols-2",
                        ProfileInput { label: "First name", value: current.first_name.clone(), on_input: move |v: String| form.write().first_name = v }
                        ProfileInput { label: "Last name", value: current.last_name.clone(), on_input: move |v: String| form.write().last_name = v }
                        ProfileInput { label: "Phone", value: current.phone.clone(), on_input: move |v: String| form.write().phone = v }
                        ProfileInput { label: "Position", value: current.position.clone(), on_input: move |v: String| form.write().position = v }
                        ProfileInput { label: "Department", value: current.department.clone(), on_input: move |v: String| form.write().department = v }
                        ProfileInput { label: "Hourly rate", value: current.hourly_rate.clone(), on_input: move |v: String| form.write().hourly_rate = v }
                        div {
                            class: "md:col-span-2 flex justify-end",
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: is_saving(),
                                "Save profile"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileInput(label: &'static str, value: String, on_input: EventHandler<String>) -> Element {
    rsx!(
        label {
            class: "form-control",
            span { class: "label-text mb-1", "{label}" }
            input {
                class: "input input-bordered w-full",
                value,
                oninput: move |e| on_input.call(e.value()),
            }
        }
    )
}

/// Company search for employees that registered without one.
#[component]
fn JoinCompany(mut notice: Signal<Option<Notice>>, form: Signal<ProfileForm>) -> Element {
    let auth_context = use_context::<AuthContext>();
    let mut query = use_signal(String::new);
    let mut results = use_signal(Vec::<CompanyDto>::new);
    let mut is_joining = use_signal(|| false);

    let on_search = move |evt: FormEvent| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        spawn(async move {
            match search_companies(&query()).await {
                Ok(found) => {
                    if found.is_empty() {
                        notice.set(Some(Notice::Error("No companies match that name".to_string())));
                    }
                    results.set(found);
                }
                Err(err) => notice.set(Some(Notice::Error(err.message))),
            }
        });
    };

    let mut on_join = move |company_id: i32| {
        let profile = match form.read().profile() {
            Ok(profile) => profile,
            Err(message) => {
                notice.set(Some(Notice::Error(message)));
                return;
            }
        };

        #[cfg(feature = "web")]
        {
            let mut auth_context = auth_context;
            is_joining.set(true);
            spawn(async move {
                match join_company(JoinCompanyDto { company_id, profile }).await {
                    Ok(response) => {
                        auth_context.update_user(response.user);
                        notice.set(Some(Notice::Success(response.message)));
                    }
                    Err(err) => notice.set(Some(Notice::Error(err.message))),
                }
                is_joining.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = (company_id, profile);
    };

    rsx!(
        div {
            class: "card bg-base-200 border border-warning",
            div {
                class: "card-body",
                h2 { class: "card-title", "Join your employer" }
                p { class: "opacity-70", "Search for the company you work for. Your profile details and rate are shared with them." }
                form {
                    class: "flex gap-2",
                    onsubmit: on_search,
                    input {
                        class: "input input-bordered flex-1",
                        placeholder: "Company name",
                        value: "{query}",
                        oninput: move |e| query.set(e.value()),
                    }
                    button { r#type: "submit", class: "btn", "Search" }
                }
                ul {
                    class: "divide-y divide-base-300",
                    for company in results() {
                        li {
                            key: "{company.id}",
                            class: "py-2 flex justify-between items-center",
                            div {
                                p { class: "font-semibold", "{company.name}" }
                                p { class: "text-sm opacity-70", {company.address.one_line()} }
                            }
                            button {
                                class: "btn btn-sm btn-primary",
                                disabled: is_joining(),
                                onclick: move |_| on_join(company.id),
                                "Join"
                            }
                        }
                    }
                }
            }
        }
    )
}
