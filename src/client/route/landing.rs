use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCalendarDays, FaFileInvoiceDollar, FaUsers},
    Icon, IconShape,
};

use crate::client::{component::Page, constant::SITE_NAME, router::Route};

#[component]
pub fn Landing() -> Element {
    rsx! {
        Title { "{SITE_NAME} | Time tracking and invoicing" }
        Page {
            class: "flex flex-col items-center gap-12",
            div {
                class: "hero py-16",
                div {
                    class: "hero-content text-center flex-col max-w-2xl",
                    h1 { class: "text-5xl font-bold", "Track every session. Bill every hour." }
                    p {
                        class: "text-lg opacity-70",
                        "{SITE_NAME} lets service businesses schedule their team's sessions, "
                        "mark them complete and turn each month into a ready to print invoice."
                    }
                    div {
                        class: "flex gap-2 mt-4",
                        Link { to: Route::Register {}, class: "btn btn-primary", "Create an account" }
                        Link { to: Route::Login {}, class: "btn btn-outline", "Log in" }
                    }
                }
            }
            div {
                class: "grid gap-4 md:grid-cols-3 w-full max-w-5xl",
                Feature {
                    icon: FaCalendarDays,
                    title: "Calendar scheduling",
                    text: "Plan sessions per employee and client on a month view."
                }
                Feature {
                    icon: FaUsers,
                    title: "Team overview",
                    text: "See hours, sessions and revenue per employee at a glance."
                }
                Feature {
                    icon: FaFileInvoiceDollar,
                    title: "Monthly invoices",
                    text: "Bundle completed sessions into numbered invoices with VAT."
                }
            }
        }
    }
}

#[component]
fn Feature<I: IconShape + Clone + PartialEq + 'static>(
    icon: I,
    title: &'static str,
    text: &'static str,
) -> Element {
    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body items-center text-center",
                div { class: "text-primary", Icon { width: 32, height: 32, icon } }
                h2 { class: "card-title", "{title}" }
                p { class: "opacity-70", "{text}" }
            }
        }
    )
}
