use dioxus::prelude::*;

use ui::components::{register_links, NavBar, NAVBAR_CSS};
use ui::core::NavEntry;
use ui::views::{About, Card, DailyHoroscope, Home, Login, NotFound, Register};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/DailyHoroscope")]
    DailyHoroscope {},
    #[route("/about")]
    About {},
    #[route("/register")]
    Register {},
    #[route("/login")]
    Login {},
    #[route("/pleasework")]
    Card {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn nav_link(entry: &NavEntry) -> Element {
    let label = entry.label();
    rsx!(Link {
        class: "navbar-item",
        to: entry.path().to_string(),
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_links(nav_link);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        Router::<Route> {}
    }
}

/// Web layout: the shared `NavBar` above the routed page.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        NavBar {}
        Outlet::<Route> {}
    }
}
