use api::model::LogoDetection;
use dioxus::prelude::*;

use crate::core::format::{bar_width, format_percent};
use crate::t;

#[derive(Debug, Clone, PartialEq)]
pub struct LogoRow {
    pub name: String,
    pub percent: String,
    pub bar_width: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogoView {
    pub rows: Vec<LogoRow>,
    pub low_confidence: bool,
}

pub fn logo_view(detection: Option<&LogoDetection>) -> Option<LogoView> {
    let detection = detection?;
    let rows = detection
        .matches
        .iter()
        .map(|logo| LogoRow {
            name: logo.name.clone(),
            percent: format_percent(logo.confidence),
            bar_width: bar_width(logo.confidence),
        })
        .collect::<Vec<_>>();
    // The warning belongs to the match list; with no matches it has nothing to qualify.
    let low_confidence = detection.flag && !rows.is_empty();
    Some(LogoView {
        rows,
        low_confidence,
    })
}

#[component]
pub fn LogoPanel(detection: Option<LogoDetection>) -> Element {
    let Some(view) = logo_view(detection.as_ref()) else {
        return rsx! {};
    };

    rsx! {
        section { class: "panel panel-logo",
            h3 { class: "panel__title", {t!("panel-logo-title")} }
            if view.rows.is_empty() {
                p { class: "panel__empty", {t!("panel-logo-none")} }
            } else {
                ul { class: "panel-logo__matches",
                    for row in view.rows.iter() {
                        li { class: "logo-match",
                            div { class: "logo-match__header",
                                span { class: "logo-match__name", "{row.name}" }
                                span { class: "logo-match__confidence", "{row.percent}" }
                            }
                            div { class: "logo-match__track",
                                div { class: "logo-match__bar", style: "width: {row.bar_width}" }
                            }
                        }
                    }
                }
                if view.low_confidence {
                    p { class: "panel__warning", {t!("panel-logo-low-confidence")} }
                }
            }
        }
    }
}
