//! Navigation manifest: the ordered (label, path) pairs behind the site header.
//!
//! The site table is a compiled-in constant (`SITE_NAV`). Other manifests are
//! built through [`NavManifest::new`] or [`NavManifest::from_json`], both of
//! which reject blank labels and paths up front so a broken link never reaches
//! the renderer.

use std::borrow::Cow;
use std::fmt;

use serde::Deserialize;

/// Top-level destinations of the site, in display order.
pub const SITE_NAV: &[NavEntry] = &[
    NavEntry::from_static("Home", "/"),
    NavEntry::from_static("Daily Horoscope", "/DailyHoroscope"),
    NavEntry::from_static("About", "/about"),
    NavEntry::from_static("Register", "/register"),
    NavEntry::from_static("Login", "/login"),
    NavEntry::from_static("Card", "/pleasework"),
];

/// One navigable destination.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavEntry {
    label: Cow<'static, str>,
    path: Cow<'static, str>,
}

impl NavEntry {
    pub const fn from_static(label: &'static str, path: &'static str) -> Self {
        Self {
            label: Cow::Borrowed(label),
            path: Cow::Borrowed(path),
        }
    }

    pub fn new<L, P>(label: L, path: P) -> Self
    where
        L: Into<Cow<'static, str>>,
        P: Into<Cow<'static, str>>,
    {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Relative targets are resolved against the current location by the router.
    pub fn is_relative(&self) -> bool {
        !self.path.starts_with('/')
    }
}

/// Validated, ordered list of [`NavEntry`] values.
///
/// Deserializes from `{"entries": [{"label": "...", "path": "..."}, ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "ManifestConfig")]
pub struct NavManifest {
    entries: Vec<NavEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestConfig {
    entries: Vec<NavEntry>,
}

impl TryFrom<ManifestConfig> for NavManifest {
    type Error = ManifestError;

    fn try_from(config: ManifestConfig) -> Result<Self, Self::Error> {
        Self::new(config.entries)
    }
}

impl NavManifest {
    pub fn new<I>(entries: I) -> Result<Self, ManifestError>
    where
        I: IntoIterator<Item = NavEntry>,
    {
        let entries: Vec<NavEntry> = entries.into_iter().collect();
        for (index, entry) in entries.iter().enumerate() {
            if entry.label.trim().is_empty() {
                return Err(ManifestError::EmptyLabel { index });
            }
            if entry.path.trim().is_empty() {
                return Err(ManifestError::EmptyPath {
                    index,
                    label: entry.label.to_string(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// The compiled-in site manifest. Its validity is covered by tests.
    pub fn site() -> Self {
        Self {
            entries: SITE_NAV.to_vec(),
        }
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn from_json(src: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(src).map_err(ManifestError::Parse)
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NavEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NavManifest {
    fn default() -> Self {
        Self::site()
    }
}

impl<'a> IntoIterator for &'a NavManifest {
    type Item = &'a NavEntry;
    type IntoIter = std::slice::Iter<'a, NavEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[derive(Debug)]
pub enum ManifestError {
    EmptyLabel { index: usize },
    EmptyPath { index: usize, label: String },
    Parse(serde_json::Error),
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLabel { index } => write!(f, "nav entry #{index} has an empty label"),
            Self::EmptyPath { index, label } => {
                write!(f, "nav entry #{index} (\"{label}\") has an empty path")
            }
            Self::Parse(err) => write!(f, "invalid nav manifest: {err}"),
        }
    }
}

impl std::error::Error for ManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}
