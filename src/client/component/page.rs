use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen p-4 md:p-8 {class}",
            {children}
        }
    )
}

#[component]
pub fn LoadingPage() -> Element {
    rsx!(
        div {
            class: "flex items-center justify-center min-h-screen w-full",
            span { class: "loading loading-spinner loading-lg" }
        }
    )
}

#[component]
pub fn ErrorPage(status: u64, message: String) -> Element {
    rsx!(
        div {
            class: "flex flex-col gap-2 items-center justify-center min-h-screen w-full",
            p { class: "text-5xl font-bold opacity-40", "{status}" }
            p { class: "text-lg", "{message}" }
        }
    )
}
