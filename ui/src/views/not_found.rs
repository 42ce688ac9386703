use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    log::debug!("no route for /{path}");

    rsx! {
        section { class: "page page-not-found",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
        }
    }
}
