#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::{register_links, NavBar, NAVBAR_CSS_INLINE};
use ui::core::NavEntry;
use ui::views::{About, Card, DailyHoroscope, Home, Login, NotFound, Register};
use ui::THEME_CSS_INLINE;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
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

#[cfg(feature = "desktop")]
fn main() {
    env_logger::init();
    log::info!("starting Aztro desktop v{}", env!("CARGO_PKG_VERSION"));

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new().with_title(format!("Aztro – v{}", env!("CARGO_PKG_VERSION"))),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    env_logger::init();
    LaunchBuilder::server().launch(App);
}

fn nav_link(entry: &NavEntry) -> Element {
    let label = entry.label();
    rsx!(Link { class: "navbar-item", to: entry.path().to_string(), "{label}" })
}

#[component]
fn App() -> Element {
    register_links(nav_link);

    rsx! {
        // Desktop builds carry no asset directory; styles are embedded.
        document::Style { "{THEME_CSS_INLINE}" }
        document::Style { "{NAVBAR_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// Desktop layout: the shared `NavBar` above the routed page.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        NavBar {}
        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use dioxus_history::{History, MemoryHistory};
    use ui::core::SITE_NAV;

    fn routed_at(path: &'static str) -> String {
        fn root(path: &'static str) -> Element {
            register_links(nav_link);
            use_context_provider(|| {
                Rc::new(MemoryHistory::with_initial_path(path)) as Rc<dyn History>
            });
            rsx! { Router::<Route> {} }
        }
        let mut dom = VirtualDom::new_with_props(root, path);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn site_paths_resolve_to_internal_routes() {
        for entry in SITE_NAV {
            let route = entry
                .path()
                .parse::<Route>()
                .unwrap_or_else(|err| panic!("{} does not parse as a route: {err}", entry.path()));
            assert!(
                !matches!(route, Route::NotFound { .. }),
                "{} only reaches the catch-all page",
                entry.path()
            );
            assert_eq!(route.to_string(), entry.path());
        }
    }

    #[test]
    fn nav_links_stay_inside_the_router() {
        let html = routed_at("/DailyHoroscope");

        assert_eq!(
            html.matches("class=\"navbar-item\"").count(),
            SITE_NAV.len(),
            "html: {html}"
        );
        // The router marks links it treats as external with rel="noopener noreferrer".
        assert!(!html.contains("noopener"), "external nav link rendered: {html}");
        for entry in SITE_NAV {
            let anchor = format!("href=\"{}\"", entry.path());
            assert!(html.contains(&anchor), "missing {anchor}: {html}");
        }
    }

    #[test]
    fn unknown_path_renders_not_found_without_nav() {
        let html = routed_at("/stars/tomorrow");
        assert!(html.contains("Nothing lives at /stars/tomorrow."), "html: {html}");
        assert!(!html.contains("navbar-item"), "html: {html}");
    }
}
