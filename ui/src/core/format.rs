//! Formatting helpers for presenting analysis results.
//!
//! Everything here is pure and total. The thresholds are part of the
//! contract with the analysis service and must keep their exact boundaries.

use std::f64::consts::PI;

/// Tamper-score risk band. Upper bounds are exclusive: `0.7` is Moderate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TamperRisk {
    High,
    Moderate,
    Low,
}

impl TamperRisk {
    pub fn from_score(score: f64) -> Self {
        if score > 0.7 {
            TamperRisk::High
        } else if score > 0.4 {
            TamperRisk::Moderate
        } else {
            TamperRisk::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TamperRisk::High => "High Risk",
            TamperRisk::Moderate => "Moderate Risk",
            TamperRisk::Low => "Low Risk",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            TamperRisk::High => "risk--high",
            TamperRisk::Moderate => "risk--moderate",
            TamperRisk::Low => "risk--low",
        }
    }
}

/// Trust-score tier. Lower bounds are inclusive: `80` is High, `60` Medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustTier {
    High,
    Medium,
    Low,
}

impl TrustTier {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            TrustTier::High
        } else if score >= 60 {
            TrustTier::Medium
        } else {
            TrustTier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrustTier::High => "high",
            TrustTier::Medium => "medium",
            TrustTier::Low => "low",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            TrustTier::High => "tier--high",
            TrustTier::Medium => "tier--medium",
            TrustTier::Low => "tier--low",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            TrustTier::High => "#16a34a",
            TrustTier::Medium => "#ca8a04",
            TrustTier::Low => "#dc2626",
        }
    }
}

/// Client-side reduction of the free-form verdict string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictCategory {
    Valid,
    Suspicious,
    Fake,
    Unknown,
}

impl VerdictCategory {
    /// Case-insensitive substring match. Checked in the fixed order Valid,
    /// Suspicious, Fake; the first hit wins (so "invalid" reads as Valid).
    pub fn classify(verdict: &str) -> Self {
        let lower = verdict.to_lowercase();
        if lower.contains("valid") || lower.contains("authentic") {
            VerdictCategory::Valid
        } else if lower.contains("suspicious") {
            VerdictCategory::Suspicious
        } else if lower.contains("fake") || lower.contains("invalid") {
            VerdictCategory::Fake
        } else {
            VerdictCategory::Unknown
        }
    }

    /// Display label; unknown verdicts pass the service text through.
    pub fn label(self, raw: &str) -> String {
        match self {
            VerdictCategory::Valid => "Valid".to_string(),
            VerdictCategory::Suspicious => "Suspicious".to_string(),
            VerdictCategory::Fake => "Fake".to_string(),
            VerdictCategory::Unknown => raw.to_string(),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            VerdictCategory::Valid => "🟢",
            VerdictCategory::Suspicious => "🟡",
            VerdictCategory::Fake => "🔴",
            VerdictCategory::Unknown => "⚪",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            VerdictCategory::Valid => "verdict--valid",
            VerdictCategory::Suspicious => "verdict--suspicious",
            VerdictCategory::Fake => "verdict--fake",
            VerdictCategory::Unknown => "verdict--unknown",
        }
    }
}

/// `0.853` -> `"85.3%"`.
pub fn format_percent(fraction: f64) -> String {
    if !fraction.is_finite() {
        return "—".to_string();
    }
    format!("{:.1}%", fraction * 100.0)
}

/// Width for a CSS bar, clamped to `[0, 100]`.
pub fn bar_width(fraction: f64) -> String {
    let pct = if fraction.is_finite() {
        (fraction * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };
    format!("{pct:.1}%")
}

/// Metadata flags mentioning suspicion or modification get highlighted.
pub fn flag_is_alarming(flag: &str) -> bool {
    let lower = flag.to_lowercase();
    lower.contains("suspicious") || lower.contains("modified")
}

/// Falls back to `placeholder` for missing or blank strings.
pub fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => placeholder,
    }
}

pub const GAUGE_RADIUS: f64 = 80.0;

/// Stroke geometry for the circular trust gauge: `(circumference, dash offset)`.
pub fn gauge_geometry(score: u32) -> (f64, f64) {
    let circumference = 2.0 * PI * GAUGE_RADIUS;
    let filled = f64::from(score.min(100)) / 100.0;
    (circumference, circumference - filled * circumference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tamper_bounds_are_exclusive() {
        assert_eq!(TamperRisk::from_score(0.71), TamperRisk::High);
        assert_eq!(TamperRisk::from_score(0.7), TamperRisk::Moderate);
        assert_eq!(TamperRisk::from_score(0.41), TamperRisk::Moderate);
        assert_eq!(TamperRisk::from_score(0.4), TamperRisk::Low);
        assert_eq!(TamperRisk::from_score(0.0), TamperRisk::Low);
        assert_eq!(TamperRisk::from_score(0.7).label(), "Moderate Risk");
    }

    #[test]
    fn trust_bounds_are_inclusive() {
        assert_eq!(TrustTier::from_score(80), TrustTier::High);
        assert_eq!(TrustTier::from_score(79), TrustTier::Medium);
        assert_eq!(TrustTier::from_score(60), TrustTier::Medium);
        assert_eq!(TrustTier::from_score(59), TrustTier::Low);
        assert_eq!(TrustTier::from_score(100), TrustTier::High);
    }

    #[test]
    fn trust_formatting_is_idempotent() {
        let first = TrustTier::from_score(72);
        let second = TrustTier::from_score(72);
        assert_eq!(first, second);
        assert_eq!(first.color(), second.color());
        assert_eq!(first.css_class(), second.css_class());
    }

    #[test]
    fn verdict_matching_uses_fixed_order() {
        assert_eq!(VerdictCategory::classify("Valid"), VerdictCategory::Valid);
        assert_eq!(
            VerdictCategory::classify("Likely AUTHENTIC"),
            VerdictCategory::Valid
        );
        assert_eq!(
            VerdictCategory::classify("suspicious layout"),
            VerdictCategory::Suspicious
        );
        assert_eq!(VerdictCategory::classify("Fake"), VerdictCategory::Fake);
        // "invalid" contains "valid", which is checked first.
        assert_eq!(VerdictCategory::classify("Invalid"), VerdictCategory::Valid);
        assert_eq!(
            VerdictCategory::classify("previously flagged but now valid"),
            VerdictCategory::Valid
        );
        assert_eq!(
            VerdictCategory::classify("Needs review"),
            VerdictCategory::Unknown
        );
    }

    #[test]
    fn unknown_verdict_passes_label_through() {
        let raw = "Needs review";
        assert_eq!(VerdictCategory::classify(raw).label(raw), "Needs review");
        assert_eq!(VerdictCategory::Fake.label(raw), "Fake");
    }

    #[test]
    fn percent_and_bar_formatting() {
        assert_eq!(format_percent(0.853), "85.3%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(f64::NAN), "—");
        assert_eq!(bar_width(1.4), "100.0%");
        assert_eq!(bar_width(-0.2), "0.0%");
    }

    #[test]
    fn alarming_flags() {
        assert!(flag_is_alarming("File MODIFIED after signing"));
        assert!(flag_is_alarming("Suspicious producer"));
        assert!(!flag_is_alarming("Created with Word"));
    }

    #[test]
    fn gauge_offsets() {
        let (circ, full) = gauge_geometry(100);
        assert!(full.abs() < 1e-9);
        let (_, empty) = gauge_geometry(0);
        assert!((empty - circ).abs() < 1e-9);
        let (_, over) = gauge_geometry(250);
        assert!(over.abs() < 1e-9);
    }

    #[test]
    fn placeholders() {
        assert_eq!(or_placeholder(Some("Ada"), "Not found"), "Ada");
        assert_eq!(or_placeholder(Some("  "), "Not found"), "Not found");
        assert_eq!(or_placeholder(None, "N/A"), "N/A");
    }
}
