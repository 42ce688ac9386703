//! Framework-independent pieces shared by every platform.

pub mod manifest;

pub use manifest::{ManifestError, NavEntry, NavManifest, SITE_NAV};
