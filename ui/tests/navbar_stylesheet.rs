//! Guards the fallback navbar stylesheet against accidental truncation or a
//! renamed selector. NavBar attaches the Bulma class tokens verbatim, so the
//! stylesheet has to keep answering to those exact names.

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Selectors matching the classes emitted by `NavBar`.
const REQUIRED_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar.is-dark",
    ".navbar > .container",
    ".navbar-brand {",
    ".navbar-item {",
    ".navbar.is-dark .navbar-item",
    "@media (max-width: 720px)",
];

#[test]
fn navbar_stylesheet_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !NAVBAR_CSS.contains(sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required selector(s) in navbar.css:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn inline_constant_matches_file() {
    assert_eq!(ui::components::NAVBAR_CSS_INLINE, NAVBAR_CSS);
}
