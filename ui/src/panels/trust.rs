use dioxus::prelude::*;

use crate::core::format::{gauge_geometry, TrustTier, GAUGE_RADIUS};
use crate::t;

#[derive(Debug, Clone, PartialEq)]
pub struct TrustView {
    pub score: u32,
    pub tier: TrustTier,
    pub circumference: f64,
    pub offset: f64,
}

pub fn trust_view(score: Option<u32>) -> Option<TrustView> {
    let score = score?.min(100);
    let (circumference, offset) = gauge_geometry(score);
    Some(TrustView {
        score,
        tier: TrustTier::from_score(score),
        circumference,
        offset,
    })
}

#[component]
pub fn TrustScorePanel(score: Option<u32>) -> Element {
    let Some(view) = trust_view(score) else {
        return rsx! {};
    };
    let size = GAUGE_RADIUS * 2.0 + 20.0;
    let center = size / 2.0;
    let color = view.tier.color();
    let tier_class = view.tier.css_class();
    let tier_label = view.tier.label();

    rsx! {
        section { class: "panel panel-trust",
            h3 { class: "panel__title", {t!("panel-trust-title")} }
            div { class: "trust-gauge",
                svg {
                    width: "{size}",
                    height: "{size}",
                    view_box: "0 0 {size} {size}",
                    circle {
                        class: "trust-gauge__track",
                        cx: "{center}",
                        cy: "{center}",
                        r: "{GAUGE_RADIUS}",
                        fill: "none",
                        stroke_width: "12",
                    }
                    circle {
                        class: "trust-gauge__value",
                        cx: "{center}",
                        cy: "{center}",
                        r: "{GAUGE_RADIUS}",
                        fill: "none",
                        stroke: "{color}",
                        stroke_width: "12",
                        stroke_linecap: "round",
                        stroke_dasharray: "{view.circumference}",
                        stroke_dashoffset: "{view.offset}",
                        transform: "rotate(-90 {center} {center})",
                    }
                }
                div { class: "trust-gauge__label",
                    span { class: "trust-gauge__score", "{view.score}" }
                    span { class: "trust-gauge__caption", {t!("panel-trust-out-of")} }
                }
            }
            p { class: "trust-tier {tier_class}", "{tier_label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_tracks_score() {
        let view = trust_view(Some(60)).expect("score present");
        assert_eq!(view.tier, TrustTier::Medium);
        assert!((view.offset - view.circumference * 0.4).abs() < 1e-9);

        let full = trust_view(Some(100)).expect("score present");
        assert!(full.offset.abs() < 1e-9);
        assert!(trust_view(None).is_none());
    }
}
