use dioxus::prelude::*;

use crate::{
    client::model::form::{optional_text, text_of},
    model::company::CompanyDataDto,
};

#[component]
fn TextField(
    label: &'static str,
    value: String,
    #[props(default)] required: bool,
    #[props(default = "text")] input_type: &'static str,
    on_input: EventHandler<String>,
) -> Element {
    rsx!(
        label {
            class: "form-control w-full",
            span { class: "label-text mb-1", "{label}" }
            input {
                class: "input input-bordered w-full",
                r#type: input_type,
                required,
                value,
                oninput: move |e| on_input.call(e.value()),
            }
        }
    )
}

/// Company details edited in place; used on registration and the settings page.
#[component]
pub fn CompanyFields(mut data: Signal<CompanyDataDto>) -> Element {
    let current = data();

    rsx!(
        div {
            class: "grid gap-3 md:grid-cols-2",
            TextField {
                label: "Company name",
                value: current.name.clone(),
                required: true,
                on_input: move |v: String| data.write().name = v,
            }
            TextField {
                label: "Company email",
                value: current.email.clone(),
                required: true,
                input_type: "email",
                on_input: move |v: String| data.write().email = v,
            }
            TextField {
                label: "Phone",
                value: current.phone.clone(),
                required: true,
                on_input: move |v: String| data.write().phone = v,
            }
            TextField {
                label: "Industry",
                value: text_of(&current.industry),
                on_input: move |v: String| data.write().industry = optional_text(&v),
            }
            TextField {
                label: "Registration number",
                value: text_of(&current.registration_number),
                on_input: move |v: String| data.write().registration_number = optional_text(&v),
            }
            TextField {
                label: "VAT number",
                value: text_of(&current.vat_number),
                on_input: move |v: String| data.write().vat_number = optional_text(&v),
            }
        }
        h3 { class: "font-semibold mt-4", "Address" }
        div {
            class: "grid gap-3 md:grid-cols-2",
            TextField {
                label: "Street",
                value: text_of(&current.address.street),
                on_input: move |v: String| data.write().address.street = optional_text(&v),
            }
            TextField {
                label: "City",
                value: text_of(&current.address.city),
                on_input: move |v: String| data.write().address.city = optional_text(&v),
            }
            TextField {
                label: "Province / State",
                value: text_of(&current.address.state),
                on_input: move |v: String| data.write().address.state = optional_text(&v),
            }
            TextField {
                label: "Postal code",
                value: text_of(&current.address.zip_code),
                on_input: move |v: String| data.write().address.zip_code = optional_text(&v),
            }
            TextField {
                label: "Country",
                value: text_of(&current.address.country),
                on_input: move |v: String| data.write().address.country = optional_text(&v),
            }
        }
        h3 { class: "font-semibold mt-4", "Banking" }
        div {
            class: "grid gap-3 md:grid-cols-2",
            TextField {
                label: "Bank",
                value: text_of(&current.banking.bank_name),
                on_input: move |v: String| data.write().banking.bank_name = optional_text(&v),
            }
            TextField {
                label: "Account holder",
                value: text_of(&current.banking.account_holder),
                on_input: move |v: String| data.write().banking.account_holder = optional_text(&v),
            }
            TextField {
                label: "Account number",
                value: text_of(&current.banking.account_number),
                on_input: move |v: String| data.write().banking.account_number = optional_text(&v),
            }
            TextField {
                label: "Branch code",
                value: text_of(&current.banking.branch_code),
                on_input: move |v: String| data.write().banking.branch_code = optional_text(&v),
            }
        }
    )
}
