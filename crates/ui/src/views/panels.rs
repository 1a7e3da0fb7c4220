use dioxus::prelude::*;

/// Spinner-only page shown while a fetch is in flight.
#[component]
pub fn LoadingPanel(title: &'static str, detail: &'static str) -> Element {
    rsx! {
        div { class: "page page--centered page--loading",
            div { class: "panel",
                div { class: "spinner", aria_hidden: "true" }
                h2 { class: "panel-title", "{title}" }
                p { class: "panel-text", "{detail}" }
            }
        }
    }
}
