use dioxus::prelude::*;

use crate::t;
use crate::workflow::ProgressSample;

/// Pipeline stages shown while the service works, in order.
pub const ANALYSIS_STEPS: [&str; 7] = [
    "Converting PDF to image...",
    "Extracting text with OCR...",
    "Analyzing metadata...",
    "Detecting QR codes...",
    "Matching logos...",
    "Detecting tampering...",
    "Calculating trust score...",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Done,
    Pending,
}

/// Marks the first `ceil(p/100 * steps)` stages done; none while indeterminate.
pub fn step_states(progress: ProgressSample) -> [StepState; ANALYSIS_STEPS.len()] {
    let done = progress.completed_steps(ANALYSIS_STEPS.len());
    std::array::from_fn(|index| {
        if index < done {
            StepState::Done
        } else {
            StepState::Pending
        }
    })
}

#[component]
pub fn LoadingOverlay(progress: ProgressSample) -> Element {
    let states = step_states(progress);
    let caption = progress.caption();
    let bar_width = progress.percent().unwrap_or(0);

    rsx! {
        div { class: "loading-overlay", role: "status", aria_live: "polite",
            div { class: "loading-overlay__card",
                div { class: "loading-overlay__spinner", aria_hidden: "true" }
                h3 { {t!("loading-title")} }
                ol { class: "loading-overlay__steps",
                    for (label, state) in ANALYSIS_STEPS.iter().zip(states) {
                        li {
                            class: if state == StepState::Done { "step step--done" } else { "step" },
                            span { class: "step__mark",
                                if state == StepState::Done { "✓" } else { "•" }
                            }
                            "{label}"
                        }
                    }
                }
                div { class: "loading-overlay__track",
                    div { class: "loading-overlay__bar", style: "width: {bar_width}%" }
                }
                p { class: "loading-overlay__caption", "{caption}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn done_count(progress: ProgressSample) -> usize {
        step_states(progress)
            .iter()
            .filter(|state| **state == StepState::Done)
            .count()
    }

    #[test]
    fn steps_follow_progress() {
        assert_eq!(done_count(ProgressSample::Indeterminate), 0);
        assert_eq!(done_count(ProgressSample::Percent(0)), 0);
        assert_eq!(done_count(ProgressSample::Percent(10)), 1);
        // 50% of 7 steps is 3.5, so the fourth is already marked.
        assert_eq!(done_count(ProgressSample::Percent(50)), 4);
        assert_eq!(done_count(ProgressSample::Percent(95)), 7);
        assert_eq!(done_count(ProgressSample::COMPLETE), 7);
    }
}
