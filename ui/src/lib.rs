//! Shared UI crate for Aztro. The navigation model, header component and
//! placeholder pages live here; platform crates supply the router.

pub mod core;
pub mod views;

pub mod components {
    // Site header driven by the nav manifest (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_links;
    pub use app_navbar::LinkBuilder;
    pub use app_navbar::NavBar;
    pub use app_navbar::{NAVBAR_CSS, NAVBAR_CSS_INLINE};
}

use dioxus::prelude::*;

/// Shared page theme (served on web).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
/// Shared page theme embedded for packaged desktop builds.
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
