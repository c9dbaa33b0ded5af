use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{
        FaBuilding, FaCalendarDays, FaChartLine, FaClock, FaFileInvoiceDollar, FaGear, FaList,
        FaRightFromBracket, FaUser, FaUsers,
    },
    Icon, IconShape,
};

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

#[component]
fn NavItem<I: IconShape + Clone + PartialEq + 'static>(to: Route, icon: I, label: &'static str) -> Element {
    let current: Route = use_route();
    let active = if current == to { "menu-active bg-primary text-primary-content" } else { "" };

    rsx!(
        li {
            Link {
                to,
                class: "flex items-center gap-3 {active}",
                Icon { width: 16, height: 16, icon }
                "{label}"
            }
        }
    )
}

/// Navigation for logged in users. Employers get the business pages on top of the shared ones.
#[component]
pub fn Sidebar() -> Element {
    let mut auth_context = use_context::<AuthContext>();
    let nav = navigator();

    let (is_employer, name, role) = {
        let state = auth_context.read();
        (
            state.is_employer(),
            state.user().map(|user| user.full_name()).unwrap_or_default(),
            state.user().map(|user| user.role.as_str()).unwrap_or_default(),
        )
    };

    rsx!(
        aside {
            class: "w-64 shrink-0 bg-base-200 min-h-screen flex flex-col no-print",
            div {
                class: "p-4 text-2xl font-bold text-primary",
                {SITE_NAME}
            }
            ul {
                class: "menu w-full flex-1 gap-1",
                NavItem { to: Route::Dashboard {}, icon: FaChartLine, label: "Dashboard" }
                NavItem { to: Route::Calendar {}, icon: FaCalendarDays, label: "Calendar" }
                NavItem { to: Route::TimeTracking {}, icon: FaClock, label: "Time Tracking" }
                if is_employer {
                    NavItem { to: Route::Clients {}, icon: FaBuilding, label: "Clients" }
                    NavItem { to: Route::Employees {}, icon: FaUsers, label: "Employees" }
                    NavItem { to: Route::Invoices {}, icon: FaFileInvoiceDollar, label: "Invoice Generator" }
                    NavItem { to: Route::AllInvoices {}, icon: FaList, label: "All Invoices" }
                    NavItem { to: Route::Settings {}, icon: FaGear, label: "Settings" }
                }
                NavItem { to: Route::Profile {}, icon: FaUser, label: "Profile" }
            }
            div {
                class: "p-4 border-t border-base-300",
                p { class: "font-semibold truncate", "{name}" }
                p { class: "text-sm opacity-60 capitalize mb-3", "{role}" }
                button {
                    class: "btn btn-outline btn-sm w-full flex gap-2",
                    onclick: move |_| {
                        auth_context.logout();
                        nav.push(Route::Login {});
                    },
                    Icon { width: 14, height: 14, icon: FaRightFromBracket }
                    "Logout"
                }
            }
        }
    )
}
