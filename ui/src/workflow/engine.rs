//! State machine for one certificate analysis at a time.
//!
//! The engine is the only writer of [`WorkflowState`]. It performs no I/O:
//! the view drives it with events (selection, sampler ticks, the API outcome,
//! the end of the grace delay) and owns the async plumbing.
//!
//! Each submission gets a fresh id. Events carrying an older id are stale and
//! dropped, so a timer or response from a superseded submission can never
//! touch the current state.

use std::rc::Rc;

use api::{AnalysisError, AnalysisRequest, AnalysisResult, ErrorKind};
use dioxus::logger::tracing::{debug, info, warn};

use super::progress::{ProgressSample, WorkflowConfig};
use super::SelectedFile;

/// Cancellable handle of the periodic progress sampler.
pub trait SamplerHandle {
    fn cancel(self);
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState {
    Idle,
    Submitting { progress: ProgressSample },
    Succeeded(Rc<AnalysisResult>),
    Failed { kind: ErrorKind, message: String },
}

/// A validated request, handed to the caller to upload exactly once.
#[derive(Debug)]
pub struct Submission {
    pub id: u64,
    pub request: AnalysisRequest,
}

#[derive(Debug)]
pub enum SelectOutcome {
    Started(Submission),
    /// A submission is already in flight; the selection was ignored.
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Progress is at 100; call [`AnalysisWorkflow::complete`] after the grace delay.
    Completing,
    Failed,
    /// The outcome belonged to a superseded submission and was discarded.
    Stale,
}

#[derive(Debug)]
pub struct AnalysisWorkflow<H> {
    pub config: WorkflowConfig,
    state: WorkflowState,
    submission_id: u64,
    sampler: Option<H>,
    settled: Option<Rc<AnalysisResult>>,
}

impl<H> Default for AnalysisWorkflow<H> {
    fn default() -> Self {
        Self::new(WorkflowConfig::default())
    }
}

impl<H> AnalysisWorkflow<H> {
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            state: WorkflowState::Idle,
            submission_id: 0,
            sampler: None,
            settled: None,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn submission_id(&self) -> u64 {
        self.submission_id
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, WorkflowState::Submitting { .. })
    }

    pub fn progress(&self) -> Option<ProgressSample> {
        match self.state {
            WorkflowState::Submitting { progress } => Some(progress),
            _ => None,
        }
    }

    /// The result of the last successful submission, if the workflow is showing one.
    pub fn current_result(&self) -> Option<&AnalysisResult> {
        match &self.state {
            WorkflowState::Succeeded(result) => Some(result.as_ref()),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            WorkflowState::Failed { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    fn is_current(&self, id: u64) -> bool {
        id == self.submission_id && self.is_submitting()
    }
}

impl<H: SamplerHandle> AnalysisWorkflow<H> {
    /// Validates a selected file and, if it is a PDF and nothing is in flight,
    /// enters `Submitting`. Non-PDF files leave the state untouched.
    pub fn select(&mut self, file: SelectedFile) -> Result<SelectOutcome, AnalysisError> {
        let request = AnalysisRequest::from_file(file.name, file.bytes)?;

        if self.is_submitting() {
            debug!(
                submission = self.submission_id,
                file = request.filename(),
                "selection ignored while a submission is in flight"
            );
            return Ok(SelectOutcome::Busy);
        }

        self.stop_sampler();
        self.settled = None;
        self.submission_id += 1;
        self.state = WorkflowState::Submitting {
            progress: ProgressSample::Indeterminate,
        };
        info!(
            submission = self.submission_id,
            file = request.filename(),
            "submission started"
        );

        Ok(SelectOutcome::Started(Submission {
            id: self.submission_id,
            request,
        }))
    }

    /// Stores the sampler handle for `id`. A handle for a submission that has
    /// already settled is cancelled on the spot.
    pub fn attach_sampler(&mut self, id: u64, handle: H) {
        if self.is_current(id) && self.settled.is_none() {
            self.stop_sampler();
            self.sampler = Some(handle);
        } else {
            handle.cancel();
        }
    }

    /// Applies one sampler tick. Returns the new sample, or `None` when the
    /// tick was stale or the submission already resolved.
    pub fn tick(&mut self, id: u64, increment: u8) -> Option<ProgressSample> {
        if !self.is_current(id) || self.settled.is_some() {
            return None;
        }
        let WorkflowState::Submitting { progress } = &mut self.state else {
            return None;
        };
        *progress = progress.advance(increment.min(self.config.max_increment), &self.config);
        Some(*progress)
    }

    pub fn resolve(
        &mut self,
        id: u64,
        outcome: Result<AnalysisResult, AnalysisError>,
    ) -> Resolution {
        if !self.is_current(id) || self.settled.is_some() {
            warn!(submission = id, current = self.submission_id, "discarding stale outcome");
            return Resolution::Stale;
        }

        self.stop_sampler();
        match outcome {
            Ok(result) => {
                info!(submission = id, "analysis received");
                self.settled = Some(Rc::new(result));
                self.state = WorkflowState::Submitting {
                    progress: ProgressSample::COMPLETE,
                };
                Resolution::Completing
            }
            Err(err) => {
                let kind = err.kind();
                warn!(submission = id, %kind, error = %err, "analysis failed");
                self.state = WorkflowState::Failed {
                    kind,
                    message: failure_message(&err),
                };
                Resolution::Failed
            }
        }
    }

    /// Ends the grace delay: reveals the settled result.
    pub fn complete(&mut self, id: u64) -> bool {
        if !self.is_current(id) {
            return false;
        }
        let Some(result) = self.settled.take() else {
            return false;
        };
        self.stop_sampler();
        self.state = WorkflowState::Succeeded(result);
        true
    }

    /// Closes the error banner.
    pub fn dismiss_error(&mut self) -> bool {
        if matches!(self.state, WorkflowState::Failed { .. }) {
            self.state = WorkflowState::Idle;
            true
        } else {
            false
        }
    }

    fn stop_sampler(&mut self) {
        if let Some(handle) = self.sampler.take() {
            handle.cancel();
        }
    }
}

fn failure_message(err: &AnalysisError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        "Failed to analyze certificate".to_string()
    } else {
        message
    }
}
