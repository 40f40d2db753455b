use api::model::{QrData, QrValidation};
use dioxus::prelude::*;

use crate::t;

#[derive(Debug, Clone, PartialEq)]
pub struct QrDetails {
    pub content: String,
    pub status: String,
    pub icon: &'static str,
    pub css_class: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QrView {
    pub found_label: &'static str,
    pub found_class: &'static str,
    /// Only present when a code was found.
    pub details: Option<QrDetails>,
}

pub fn qr_view(qr: Option<&QrData>) -> Option<QrView> {
    let qr = qr?;
    if !qr.found {
        return Some(QrView {
            found_label: "No",
            found_class: "qr--missing",
            details: None,
        });
    }

    let content = match qr.content.as_deref() {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => "N/A".to_string(),
    };
    Some(QrView {
        found_label: "Yes",
        found_class: "qr--found",
        details: Some(QrDetails {
            content,
            status: capitalize(qr.validation.as_str()),
            icon: validation_icon(qr.validation),
            css_class: validation_class(qr.validation),
        }),
    })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn validation_icon(validation: QrValidation) -> &'static str {
    match validation {
        QrValidation::Valid => "✓",
        QrValidation::Invalid => "✗",
        QrValidation::Unverifiable => "?",
        QrValidation::Unknown => "—",
    }
}

fn validation_class(validation: QrValidation) -> &'static str {
    match validation {
        QrValidation::Valid => "qr-status--valid",
        QrValidation::Invalid => "qr-status--invalid",
        QrValidation::Unverifiable => "qr-status--unverifiable",
        QrValidation::Unknown => "qr-status--unknown",
    }
}

#[component]
pub fn QrPanel(qr: Option<QrData>) -> Element {
    let Some(view) = qr_view(qr.as_ref()) else {
        return rsx! {};
    };

    rsx! {
        section { class: "panel panel-qr",
            h3 { class: "panel__title", {t!("panel-qr-title")} }
            dl { class: "panel__fields",
                div { class: "panel__field",
                    dt { {t!("panel-qr-found")} }
                    dd { class: view.found_class, "{view.found_label}" }
                }
                if let Some(details) = view.details.as_ref() {
                    div { class: "panel__field",
                        dt { {t!("panel-qr-content")} }
                        dd { class: "panel-qr__content", "{details.content}" }
                    }
                    div { class: "panel__field",
                        dt { {t!("panel-qr-validation")} }
                        dd { class: details.css_class, "{details.icon} {details.status}" }
                    }
                }
            }
        }
    }
}
