use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaChevronLeft, FaChevronRight},
    Icon,
};

use crate::{client::constant::month_name, model::calendar::shift_month};

/// Previous / next month buttons around the month's name.
#[component]
pub fn MonthNav(mut year: Signal<i32>, mut month: Signal<u32>) -> Element {
    let mut step = move |delta: i32| {
        if let Some((next_year, next_month)) = shift_month(year(), month(), delta) {
            year.set(next_year);
            month.set(next_month);
        }
    };

    rsx!(
        div {
            class: "flex items-center gap-2",
            button {
                class: "btn btn-sm btn-ghost",
                onclick: move |_| step(-1),
                Icon { width: 14, height: 14, icon: FaChevronLeft }
            }
            span { class: "font-semibold min-w-36 text-center", "{month_name(month())} {year}" }
            button {
                class: "btn btn-sm btn-ghost",
                onclick: move |_| step(1),
                Icon { width: 14, height: 14, icon: FaChevronRight }
            }
        }
    )
}
