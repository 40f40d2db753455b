#![cfg(test)]
/*!
Selectors the shared components render and the desktop build depends on.

A substring check is enough as an early warning. When markup in `ui` renames
a class, update the list below together with the stylesheet.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".navbar__links",
    // Buttons
    ".button {",
    ".button--primary",
    // Upload and workflow
    ".upload {",
    ".upload--dragging",
    ".upload--disabled",
    ".analysis__notice",
    ".analysis__error",
    ".analysis__empty",
    ".analysis__grid",
    // Loading overlay
    ".loading-overlay",
    ".loading-overlay__bar",
    ".step--done",
    // Panels
    ".panel {",
    ".panel__field",
    ".panel__warning",
    ".flag--alarming",
    ".qr-status--valid",
    ".qr-status--invalid",
    ".logo-match__bar",
    ".risk--high",
    ".risk--moderate",
    ".risk--low",
    ".trust-gauge__score",
    ".tier--high",
    ".verdict--valid",
    ".verdict--fake",
    // Report export
    ".report-export__meta--success",
    ".report-export__meta--error",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(*sel))
        .copied()
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars); \
         did the file get truncated or the path change?"
    );
}

#[test]
fn every_risk_band_is_styled() {
    for band in ["high", "moderate", "low"] {
        let selector = format!(".risk--{band}");
        assert!(THEME_CSS.contains(&selector), "missing {selector}");
    }
}
