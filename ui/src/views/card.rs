use dioxus::prelude::*;

#[component]
pub fn Card() -> Element {
    rsx! {
        section { class: "page page-card",
            h1 { "Card" }
        }
    }
}
