use api::model::TamperReport;
use dioxus::prelude::*;

use super::image::image_data_url;
use crate::core::format::{format_percent, TamperRisk};
use crate::t;

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapView {
    pub src: String,
    /// `None` when the service sent an image without a score.
    pub badge: Option<(String, &'static str)>,
}

pub fn heatmap_view(report: Option<&TamperReport>) -> Option<HeatmapView> {
    let report = report?;
    let heatmap = report.heatmap.as_ref().filter(|image| !image.is_empty())?;
    let badge = report.score.map(|score| {
        let risk = TamperRisk::from_score(score);
        (
            format!("{}: {}", risk.label(), format_percent(score)),
            risk.css_class(),
        )
    });
    Some(HeatmapView {
        src: image_data_url(heatmap),
        badge,
    })
}

#[component]
pub fn HeatmapPanel(report: Option<TamperReport>) -> Element {
    let Some(view) = heatmap_view(report.as_ref()) else {
        return rsx! {};
    };

    rsx! {
        section { class: "panel panel-heatmap",
            div { class: "panel__header",
                h3 { class: "panel__title", {t!("panel-heatmap-title")} }
                if let Some((label, class)) = view.badge.as_ref() {
                    span { class: "risk-badge {class}", "{label}" }
                }
            }
            img { class: "panel-heatmap__image", src: "{view.src}", alt: "Tamper heatmap" }
            div { class: "panel-heatmap__legend",
                span { class: "legend legend--low", {t!("panel-heatmap-legend-low")} }
                span { class: "legend legend--medium", {t!("panel-heatmap-legend-medium")} }
                span { class: "legend legend--high", {t!("panel-heatmap-legend-high")} }
            }
        }
    }
}
