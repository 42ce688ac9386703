use dioxus::prelude::*;

#[component]
pub fn Register() -> Element {
    rsx! {
        section { class: "page page-register",
            h1 { "Register" }
        }
    }
}

#[component]
pub fn Login() -> Element {
    rsx! {
        section { class: "page page-login",
            h1 { "Login" }
        }
    }
}
