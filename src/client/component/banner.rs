use dioxus::prelude::*;

#[cfg(feature = "web")]
use crate::client::constant::BANNER_TIMEOUT_MS;

/// Message shown above a page after an action.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    fn class(&self) -> &'static str {
        match self {
            Notice::Success(_) => "alert-success",
            Notice::Error(_) => "alert-error",
        }
    }

    fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }
}

/// Renders the current notice and clears it after a few seconds.
#[component]
pub fn Banner(mut notice: Signal<Option<Notice>>) -> Element {
    #[cfg(feature = "web")]
    use_effect(move || {
        if notice.read().is_some() {
            let shown = notice.peek().clone();
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(BANNER_TIMEOUT_MS).await;
                // A newer notice keeps its own timer
                if *notice.peek() == shown {
                    notice.set(None);
                }
            });
        }
    });

    rsx!(
        if let Some(current) = notice() {
            div {
                role: "alert",
                class: "alert {current.class()} mb-4 flex justify-between",
                span { "{current.text()}" }
                button {
                    class: "btn btn-ghost btn-xs",
                    onclick: move |_| notice.set(None),
                    "✕"
                }
            }
        }
    )
}
