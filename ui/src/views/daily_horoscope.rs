use dioxus::prelude::*;

#[component]
pub fn DailyHoroscope() -> Element {
    rsx! {
        section { class: "page page-daily",
            h1 { "Daily Horoscope" }
        }
    }
}
