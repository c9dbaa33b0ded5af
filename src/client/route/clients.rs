use dioxus::prelude::*;

use crate::{
    client::{
        component::{Banner, ConfirmationModal, ErrorPage, LoadingPage, Modal, Notice, Page},
        constant::SITE_NAME,
        model::{
            error::ApiError,
            form::{optional_text, parse_amount, text_of},
        },
    },
    model::{
        client::{ClientDto, SaveClientDto},
        invoice::format_money,
    },
};

#[cfg(feature = "web")]
use crate::client::api::client::{create_client, delete_client, get_clients, update_client};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[derive(Clone, Debug, PartialEq, Default)]
struct ClientForm {
    name: String,
    email: String,
    phone: String,
    hourly_rate: String,
}

impl ClientForm {
    fn from_client(client: &ClientDto) -> Self {
        Self {
            name: client.name.clone(),
            email: text_of(&client.email),
            phone: text_of(&client.phone),
            hourly_rate: client.hourly_rate.to_string(),
        }
    }

    fn to_dto(&self) -> Result<SaveClientDto, String> {
        if self.name.trim().is_empty() {
            return Err("Client name is required".to_string());
        }

        Ok(SaveClientDto {
            name: self.name.trim().to_string(),
            email: optional_text(&self.email),
            phone: optional_text(&self.phone),
            hourly_rate: parse_amount(&self.hourly_rate)?,
        })
    }
}

#[component]
pub fn Clients() -> Element {
    let mut clients = use_signal(|| None::<Vec<ClientDto>>);
    let mut error = use_signal(|| None::<ApiError>);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut notice = use_signal(|| None::<Notice>);

    let mut show_form = use_signal(|| false);
    let mut form = use_signal(ClientForm::default);
    let mut editing = use_signal(|| None::<i32>);
    let mut form_error = use_signal(|| None::<String>);
    let mut is_saving = use_signal(|| false);

    let mut show_delete = use_signal(|| false);
    let mut to_delete = use_signal(|| None::<ClientDto>);
    let mut is_deleting = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_clients().await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(list) => {
                    clients.set(Some(list.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch clients: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    let on_save = move |evt: FormEvent| {
        evt.prevent_default();

        let dto = match form.read().to_dto() {
            Ok(dto) => dto,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        form_error.set(None);

        #[cfg(feature = "web")]
        {
            let id = editing();
            is_saving.set(true);
            spawn(async move {
                let result = match id {
                    Some(id) => update_client(id, dto).await.map(|_| "Client updated"),
                    None => create_client(dto).await.map(|_| "Client added"),
                };
                match result {
                    Ok(message) => {
                        show_form.set(false);
                        notice.set(Some(Notice::Success(message.to_string())));
                        refetch_trigger.set(refetch_trigger() + 1);
                    }
                    Err(err) => form_error.set(Some(err.message)),
                }
                is_saving.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = dto;
    };

    let on_delete = move |_: ()| {
        let Some(client) = to_delete() else {
            return;
        };

        #[cfg(feature = "web")]
        {
            is_deleting.set(true);
            spawn(async move {
                match delete_client(client.id).await {
                    Ok(response) => {
                        notice.set(Some(Notice::Success(response.message)));
                        refetch_trigger.set(refetch_trigger() + 1);
                    }
                    Err(err) => {
                        tracing::error!("Failed to delete client: {}", err);
                        notice.set(Some(Notice::Error(err.message)));
                    }
                }
                show_delete.set(false);
                is_deleting.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = client;
    };

    let current_form = form();
    let delete_message = to_delete()
        .map(|client| {
            format!(
                "Remove {}? Sessions and invoices that mention them are kept.",
                client.name
            )
        })
        .unwrap_or_default();

    rsx! {
        Title { "Clients | {SITE_NAME}" }
        if let Some(list) = clients() {
            Page {
                div {
                    class: "max-w-5xl",
                    Banner { notice }
                    div {
                        class: "flex justify-between items-center mb-6",
                        h1 { class: "text-2xl font-bold", "Clients" }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                editing.set(None);
                                form.set(ClientForm::default());
                                form_error.set(None);
                                show_form.set(true);
                            },
                            "Add client"
                        }
                    }
                    if list.is_empty() {
                        p { class: "opacity-60", "No clients yet. Add one to start scheduling sessions." }
                    } else {
                        div {
                            class: "overflow-x-auto card bg-base-200",
                            table {
                                class: "table",
                                thead {
                                    tr {
                                        th { "Name" }
                                        th { "Email" }
                                        th { "Phone" }
                                        th { class: "text-right", "Hourly rate" }
                                        th {}
                                    }
                                }
                                tbody {
                                    for client in list {
                                        tr {
                                            key: "{client.id}",
                                            td { class: "font-semibold", "{client.name}" }
                                            td { {text_of(&client.email)} }
                                            td { {text_of(&client.phone)} }
                                            td { class: "text-right", {format!("R {}", format_money(client.hourly_rate))} }
                                            td {
                                                class: "flex gap-2 justify-end",
                                                button {
                                                    class: "btn btn-sm",
                                                    onclick: {
                                                        let client = client.clone();
                                                        move |_| {
                                                            form.set(ClientForm::from_client(&client));
                                                            editing.set(Some(client.id));
                                                            form_error.set(None);
                                                            show_form.set(true);
                                                        }
                                                    },
                                                    "Edit"
                                                }
                                                button {
                                                    class: "btn btn-sm btn-error btn-outline",
                                                    onclick: {
                                                        let client = client.clone();
                                                        move |_| {
                                                            to_delete.set(Some(client.clone()));
                                                            show_delete.set(true);
                                                        }
                                                    },
                                                    "Delete"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            Modal {
                show: show_form,
                title: if editing().is_some() { "Edit client".to_string() } else { "Add client".to_string() },
                prevent_close: is_saving(),
                form {
                    class: "flex flex-col gap-3",
                    onsubmit: on_save,
                    if let Some(message) = form_error() {
                        div { role: "alert", class: "alert alert-error", "{message}" }
                    }
                    label {
                        class: "form-control",
                        span { class: "label-text mb-1", "Name" }
                        input {
                            class: "input input-bordered w-full",
                            value: current_form.name.clone(),
                            oninput: move |e| form.write().name = e.value(),
                        }
                    }
                    label {
                        class: "form-control",
                        span { class: "label-text mb-1", "Email" }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "email",
                            value: current_form.email.clone(),
                            oninput: move |e| form.write().email = e.value(),
                        }
                    }
                    label {
                        class: "form-control",
                        span { class: "label-text mb-1", "Phone" }
                        input {
                            class: "input input-bordered w-full",
                            value: current_form.phone.clone(),
                            oninput: move |e| form.write().phone = e.value(),
                        }
                    }
                    label {
                        class: "form-control",
                        span { class: "label-text mb-1", "Hourly rate" }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "number",
                            step: "0.01",
                            min: "0",
                            placeholder: "75",
                            value: current_form.hourly_rate.clone(),
                            oninput: move |e| form.write().hourly_rate = e.value(),
                        }
                    }
                    div {
                        class: "modal-action",
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: is_saving(),
                            if is_saving() {
                                span { class: "loading loading-spinner loading-sm" }
                            }
                            "Save"
                        }
                    }
                }
            }
            ConfirmationModal {
                show: show_delete,
                title: "Delete client".to_string(),
                message: delete_message,
                is_processing: is_deleting(),
                on_confirm: on_delete,
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage {}
        }
    }
}
