use chrono::{NaiveDate, Utc};
use dioxus::prelude::*;

use crate::model::{calendar::month_grid, event::EventDto};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Sunday-first month grid. Clicking an empty part of a day or one of its sessions reports it
/// back to the page.
#[component]
pub fn MonthCalendar(
    events: Vec<EventDto>,
    year: i32,
    month: u32,
    on_select_day: EventHandler<NaiveDate>,
    on_select_event: EventHandler<EventDto>,
) -> Element {
    let grid = month_grid(&events, year, month);
    let today = Utc::now().date_naive();

    rsx!(
        div {
            class: "calendar-grid",
            for weekday in WEEKDAYS {
                div { class: "text-center text-sm font-semibold opacity-70 py-2", "{weekday}" }
            }
            for (index, cell) in grid.into_iter().enumerate() {
                if let Some(day) = cell {
                    div {
                        key: "{day.date}",
                        class: if day.date == today { "calendar-cell border-primary" } else { "calendar-cell" },
                        onclick: move |_| on_select_day.call(day.date),
                        p { class: "text-sm font-semibold mb-1", "{day.day}" }
                        for event in day.events {
                            CalendarEvent { event, on_select: on_select_event }
                        }
                    }
                } else {
                    div { key: "blank-{index}" }
                }
            }
        }
    )
}

#[component]
fn CalendarEvent(event: EventDto, on_select: EventHandler<EventDto>) -> Element {
    let color = event.color.clone().unwrap_or_else(|| "#3b82f6".to_string());
    let opacity = if event.completed { "opacity-60" } else { "" };
    let time = event.start.format("%H:%M").to_string();
    let title = event.title.clone();

    rsx!(
        div {
            class: "event-chip {opacity}",
            style: "background-color: {color}",
            onclick: move |evt| {
                evt.stop_propagation();
                on_select.call(event.clone());
            },
            "{time} {title}"
        }
    )
}
