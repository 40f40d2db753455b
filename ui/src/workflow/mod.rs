//! Submission workflow: one certificate in flight at a time, a simulated
//! progress indicator, and the result or error that ends it.

use std::path::Path;

pub mod engine;
pub mod progress;
mod view;

pub use engine::{
    AnalysisWorkflow, Resolution, SamplerHandle, SelectOutcome, Submission, WorkflowState,
};
pub use progress::{ProgressSample, WorkflowConfig};
pub use view::AnalysisView;

/// A file picked by the user, read fully into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Builds a selection from a file engine key. Desktop engines key files by
    /// their full path; only the final component is kept as the name.
    pub fn from_engine_key(key: &str, bytes: Vec<u8>) -> Self {
        Self::new(base_name(key), bytes)
    }
}

fn base_name(key: &str) -> &str {
    let name = Path::new(key)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(key);
    name.rsplit('\\').next().unwrap_or(name)
}
