//! Dioxus side of the workflow. A coroutine owns the engine and turns
//! uploads, sampler ticks, API outcomes and grace timers into engine events.
//! Signals mirror the engine state for rendering.

use std::cell::RefCell;
use std::rc::Rc;

use api::{AnalysisClient, AnalysisError, AnalysisResult};
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;
use rand::Rng;

use crate::components::{FileUpload, LoadingOverlay};
use crate::core::{platform, timing};
use crate::panels::{
    CertificatePreview, HeatmapPanel, LogoPanel, MetadataPanel, OcrPanel, QrPanel,
    TrustScorePanel, VerdictPanel,
};
use crate::report::ReportExportButton;
use crate::t;

use super::engine::{AnalysisWorkflow, Resolution, SamplerHandle, SelectOutcome, Submission, WorkflowState};
use super::SelectedFile;

type EventSlot = Rc<RefCell<Option<UnboundedSender<WorkflowEvent>>>>;

impl SamplerHandle for Task {
    fn cancel(self) {
        Task::cancel(self);
    }
}

#[component]
pub fn AnalysisView() -> Element {
    let workflow = use_signal(AnalysisWorkflow::<Task>::default);
    let notice = use_signal(|| Option::<String>::None);

    let sender_slot: EventSlot = use_hook(|| Rc::new(RefCell::new(None)));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<WorkflowEvent>| {
        let sender_slot = sender_slot_for_loop.clone();
        let mut workflow_signal = workflow;
        let mut notice_signal = notice;
        let client = AnalysisClient::from_env();

        async move {
            while let Some(event) = rx.next().await {
                match event {
                    WorkflowEvent::Select(file) => {
                        match workflow_signal.with_mut(|wf| wf.select(file)) {
                            Ok(SelectOutcome::Started(submission)) => {
                                notice_signal.set(None);
                                let id = submission.id;
                                let interval = workflow_signal.with(|wf| wf.config.tick_interval_ms);
                                if let Some(sampler) = queue_sampler(&sender_slot, id, interval) {
                                    workflow_signal.with_mut(|wf| wf.attach_sampler(id, sampler));
                                }
                                queue_analysis(&sender_slot, client.clone(), submission);
                            }
                            Ok(SelectOutcome::Busy) => {
                                notice_signal.set(Some(t!("notice-busy")));
                            }
                            Err(err) => {
                                notice_signal.set(Some(err.to_string()));
                            }
                        }
                    }
                    WorkflowEvent::Tick { submission } => {
                        let max = workflow_signal.with(|wf| wf.config.max_increment);
                        let increment = rand::thread_rng().gen_range(0..=max);
                        workflow_signal.with_mut(|wf| wf.tick(submission, increment));
                    }
                    WorkflowEvent::Resolved {
                        submission,
                        outcome,
                    } => {
                        let resolution = workflow_signal.with_mut(|wf| wf.resolve(submission, outcome));
                        if resolution == Resolution::Completing {
                            let grace_ms = workflow_signal.with(|wf| wf.config.grace_ms);
                            queue_grace(&sender_slot, submission, grace_ms);
                        }
                    }
                    WorkflowEvent::GraceElapsed { submission } => {
                        if !workflow_signal.with_mut(|wf| wf.complete(submission)) {
                            debug!(submission, "grace delay elapsed for a superseded submission");
                        }
                    }
                    WorkflowEvent::DismissError => {
                        workflow_signal.with_mut(|wf| wf.dismiss_error());
                    }
                }
            }
        }
    });

    sender_slot.borrow_mut().replace(coroutine.tx());

    let send_event = move |event: WorkflowEvent| coroutine.send(event);

    let snapshot = workflow.read().state().clone();
    let busy = matches!(snapshot, WorkflowState::Submitting { .. });
    let notice_text = notice();

    let body = match snapshot {
        WorkflowState::Idle => rsx! {
            div { class: "analysis__empty",
                h3 { {t!("dashboard-empty-title")} }
                p { {t!("dashboard-empty-body")} }
            }
        },
        WorkflowState::Submitting { progress } => rsx! {
            LoadingOverlay { progress }
        },
        WorkflowState::Succeeded(result) => rsx! {
            AnalysisResults { result }
        },
        WorkflowState::Failed { message, .. } => rsx! {
            div { class: "analysis__error", role: "alert",
                span { class: "analysis__error-text", "⚠️ {message}" }
                button {
                    r#type: "button",
                    class: "analysis__error-dismiss",
                    aria_label: t!("dashboard-dismiss-error"),
                    onclick: move |_| send_event(WorkflowEvent::DismissError),
                    "×"
                }
            }
        },
    };

    rsx! {
        article { class: "analysis",
            FileUpload {
                disabled: busy,
                on_select: move |file: SelectedFile| send_event(WorkflowEvent::Select(file)),
            }
            if let Some(text) = notice_text {
                p { class: "analysis__notice", role: "status", "{text}" }
            }
            {body}
        }
    }
}

#[component]
fn AnalysisResults(result: Rc<AnalysisResult>) -> Element {
    let trust_score = result
        .trust_evaluation
        .as_ref()
        .and_then(|evaluation| evaluation.trust_score);

    rsx! {
        div { class: "analysis__results",
            div { class: "analysis__toolbar",
                h2 { {t!("dashboard-results-title")} }
                ReportExportButton { result: Some(result.clone()) }
            }
            div { class: "analysis__summary",
                TrustScorePanel { score: trust_score }
                VerdictPanel { evaluation: result.trust_evaluation.clone() }
            }
            div { class: "analysis__grid",
                CertificatePreview { image: result.certificate_preview.clone() }
                HeatmapPanel { report: result.tamper_report.clone() }
                OcrPanel { ocr: result.ocr.clone() }
                MetadataPanel { metadata: result.metadata.clone() }
                QrPanel { qr: result.qr.clone() }
                LogoPanel { detection: result.logo_detection.clone() }
            }
        }
    }
}

fn queue_sampler(sender_slot: &EventSlot, submission: u64, interval_ms: u64) -> Option<Task> {
    let sender = sender_slot.borrow().as_ref().cloned()?;
    Some(platform::spawn_future(async move {
        loop {
            timing::sleep_ms(interval_ms).await;
            if sender
                .unbounded_send(WorkflowEvent::Tick { submission })
                .is_err()
            {
                break;
            }
        }
    }))
}

fn queue_analysis(sender_slot: &EventSlot, client: AnalysisClient, submission: Submission) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            let Submission { id, request } = submission;
            let outcome = client.analyze(request).await;
            let _ = sender.unbounded_send(WorkflowEvent::Resolved {
                submission: id,
                outcome,
            });
        });
    }
}

fn queue_grace(sender_slot: &EventSlot, submission: u64, grace_ms: u64) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(grace_ms).await;
            let _ = sender.unbounded_send(WorkflowEvent::GraceElapsed { submission });
        });
    }
}

#[derive(Debug)]
enum WorkflowEvent {
    Select(SelectedFile),
    Tick {
        submission: u64,
    },
    Resolved {
        submission: u64,
        outcome: Result<AnalysisResult, AnalysisError>,
    },
    GraceElapsed {
        submission: u64,
    },
    DismissError,
}
