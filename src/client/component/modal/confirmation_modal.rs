use dioxus::prelude::*;

use super::Modal;

/// Yes/no dialog for destructive actions such as deleting a client or an invoice.
#[component]
pub fn ConfirmationModal(
    mut show: Signal<bool>,
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_text: String,
    #[props(default = "btn-error".to_string())] confirm_class: String,
    is_processing: bool,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx!(
        Modal {
            show,
            title,
            prevent_close: is_processing,
            p { class: "py-2", "{message}" }
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn",
                    disabled: is_processing,
                    onclick: move |_| show.set(false),
                    "Cancel"
                }
                button {
                    r#type: "button",
                    class: "btn {confirm_class}",
                    disabled: is_processing,
                    onclick: move |_| on_confirm.call(()),
                    if is_processing {
                        span { class: "loading loading-spinner loading-sm mr-2" }
                    }
                    "{confirm_text}"
                }
            }
        }
    )
}
