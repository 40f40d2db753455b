use api::model::TrustEvaluation;
use dioxus::prelude::*;

use crate::core::format::VerdictCategory;
use crate::t;

#[derive(Debug, Clone, PartialEq)]
pub struct VerdictView {
    pub category: VerdictCategory,
    pub label: String,
    pub reasons: Vec<String>,
}

pub fn verdict_view(evaluation: Option<&TrustEvaluation>) -> Option<VerdictView> {
    let evaluation = evaluation?;
    let verdict = evaluation
        .verdict
        .as_deref()
        .map(str::trim)
        .filter(|verdict| !verdict.is_empty())?;
    let category = VerdictCategory::classify(verdict);
    Some(VerdictView {
        category,
        label: category.label(verdict),
        reasons: evaluation.reasons.clone(),
    })
}

#[component]
pub fn VerdictPanel(evaluation: Option<TrustEvaluation>) -> Element {
    let Some(view) = verdict_view(evaluation.as_ref()) else {
        return rsx! {};
    };
    let icon = view.category.icon();
    let class = view.category.css_class();

    rsx! {
        section { class: "panel panel-verdict {class}",
            h3 { class: "panel__title", {t!("panel-verdict-title")} }
            p { class: "verdict",
                span { class: "verdict__icon", "{icon}" }
                span { class: "verdict__label", "{view.label}" }
            }
            if !view.reasons.is_empty() {
                h4 { class: "panel__subtitle", {t!("panel-verdict-reasons")} }
                ul { class: "verdict__reasons",
                    for reason in view.reasons.iter() {
                        li { "{reason}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluation(verdict: &str) -> TrustEvaluation {
        TrustEvaluation {
            trust_score: Some(40),
            verdict: Some(verdict.into()),
            reasons: vec!["Logo mismatch".into()],
        }
    }

    #[test]
    fn unknown_verdict_passes_text_through() {
        let view = verdict_view(Some(&evaluation("Needs review"))).expect("verdict");
        assert_eq!(view.category, VerdictCategory::Unknown);
        assert_eq!(view.label, "Needs review");
        assert_eq!(view.category.icon(), "⚪");
    }

    #[test]
    fn known_verdicts_are_relabelled() {
        let view = verdict_view(Some(&evaluation("likely FAKE"))).expect("verdict");
        assert_eq!(view.label, "Fake");
        assert_eq!(view.reasons, vec!["Logo mismatch".to_string()]);
    }

    #[test]
    fn blank_verdict_hides_panel() {
        assert!(verdict_view(Some(&evaluation("  "))).is_none());
        assert!(verdict_view(None).is_none());
    }
}
