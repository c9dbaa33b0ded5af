use dioxus::prelude::*;

use crate::client::{component::Header, router::Route};

/// Public pages: top header over the page.
#[component]
pub fn Layout() -> Element {
    rsx!(div {
        Header {  }
        div {
            class: "pt-16",
            Outlet::<Route> {}
        }
    })
}
