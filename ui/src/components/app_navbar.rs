use std::rc::Rc;
use std::sync::Once;

use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::core::manifest::{NavEntry, NavManifest};

/// Navbar stylesheet for platforms that serve assets (web).
pub const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
/// Same stylesheet embedded at compile time for packaged desktop builds.
pub const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Builds one navigable element for a manifest entry.
///
/// `ui` does not know each platform's `Route` enum, so the platform crate
/// supplies the router binding. A builder for the Dioxus router looks like:
/// ```ignore
/// fn nav_link(entry: &NavEntry) -> Element {
///     let label = entry.label();
///     rsx!(Link { class: "navbar-item", to: entry.path().to_string(), "{label}" })
/// }
/// ui::components::register_links(nav_link);
/// ```
///
/// Tests (or embedders without a router) pass their own closure through the
/// `links` prop of [`NavBar`].
#[derive(Clone)]
pub struct LinkBuilder(Build);

#[derive(Clone)]
enum Build {
    Fn(fn(&NavEntry) -> Element),
    Closure(Rc<dyn Fn(&NavEntry) -> Element>),
}

impl LinkBuilder {
    pub fn new(build: impl Fn(&NavEntry) -> Element + 'static) -> Self {
        Self(Build::Closure(Rc::new(build)))
    }

    pub fn from_fn(build: fn(&NavEntry) -> Element) -> Self {
        Self(Build::Fn(build))
    }

    /// Plain anchors. Activating one reloads the page, so this is only a fallback.
    pub fn anchor() -> Self {
        Self::from_fn(anchor_link)
    }

    /// The builder installed through [`register_links`], if any.
    pub fn registered() -> Option<Self> {
        LINK_BUILDER.get().copied().map(Self::from_fn)
    }

    pub fn render(&self, entry: &NavEntry) -> Element {
        match &self.0 {
            Build::Fn(build) => build(entry),
            Build::Closure(build) => build(entry),
        }
    }
}

fn anchor_link(entry: &NavEntry) -> Element {
    let label = entry.label();
    let href = entry.path();
    rsx! {
        a { class: "navbar-item", href: "{href}", "{label}" }
    }
}

static ANCHOR_FALLBACK_WARNING: Once = Once::new();

impl Default for LinkBuilder {
    fn default() -> Self {
        Self::registered().unwrap_or_else(|| {
            ANCHOR_FALLBACK_WARNING.call_once(|| {
                log::warn!("no nav link builder registered; falling back to plain anchors");
            });
            Self::anchor()
        })
    }
}

// `fn` builders compare by address so defaulted props stay equal across renders.
impl PartialEq for LinkBuilder {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Build::Fn(a), Build::Fn(b)) => std::ptr::fn_addr_eq(*a, *b),
            (Build::Closure(a), Build::Closure(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

static LINK_BUILDER: OnceCell<fn(&NavEntry) -> Element> = OnceCell::new();

/// Install the platform's router-backed link builder. First call wins.
pub fn register_links(build: fn(&NavEntry) -> Element) {
    if LINK_BUILDER.set(build).is_err() {
        log::trace!("nav link builder already registered");
    }
}

/// Site header: `header > nav.navbar.is-dark > div.container > div.navbar-brand`
/// holding one link per manifest entry, in manifest order.
///
/// Rendering is a pure projection of `manifest`; link activation belongs to
/// whatever `links` produces.
#[component]
pub fn NavBar(
    #[props(default)] manifest: NavManifest,
    #[props(default)] links: LinkBuilder,
) -> Element {
    log::debug!("NavBar render ({} entries)", manifest.len());

    rsx! {
        header {
            nav { class: "navbar is-dark",
                div { class: "container",
                    div { class: "navbar-brand",
                        { manifest.iter().map(|entry| links.render(entry)) }
                    }
                }
            }
        }
    }
}
