use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaClock, Icon};

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

#[component]
pub fn Header() -> Element {
    let auth_context = use_context::<AuthContext>();
    let logged_in = auth_context.read().is_authenticated();

    rsx!(div {
        class: "fixed flex justify-between items-center gap-4 w-full h-16 px-4 bg-base-200 z-20 no-print",
        Link {
            to: Route::Landing {},
            div {
                class: "flex items-center gap-2 text-primary",
                Icon { width: 24, height: 24, icon: FaClock }
                p { class: "text-xl font-bold", {SITE_NAME} }
            }
        }
        div {
            class: "flex items-center gap-2",
            if logged_in {
                Link { to: Route::Dashboard {}, class: "btn btn-primary", "Dashboard" }
            } else {
                Link { to: Route::Login {}, class: "btn btn-ghost", "Login" }
                Link { to: Route::Register {}, class: "btn btn-primary", "Get started" }
            }
        }
    })
}
