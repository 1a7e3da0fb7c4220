use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "page page--centered",
            div { class: "panel panel--notice",
                h2 { class: "panel-title", "Page not found" }
                p { class: "panel-text", "Nothing is registered at {path}." }
                Link { class: "btn btn-secondary", to: Route::Listing {}, "Back to Team Directory" }
            }
        }
    }
}
