use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Aztro" }
            p { "Your stars, read daily." }
        }
    }
}
