//! Error taxonomy shared by the API client and the workflow orchestrator.

use std::fmt;

/// Coarse classification of every failure the client can surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Client-side file rejection. Never reaches the network.
    InvalidInput,
    /// No response within the configured bound.
    Timeout,
    /// The service answered with a failure (or could not be reached).
    ServiceError,
    /// The response body could not be decoded.
    ProtocolError,
    /// Report export attempted with nothing to export.
    NoResult,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::Timeout => "timeout",
            ErrorKind::ServiceError => "service_error",
            ErrorKind::ProtocolError => "protocol_error",
            ErrorKind::NoResult => "no_result",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("Please select a PDF file ({filename} is {mime})")]
    InvalidInput { filename: String, mime: String },

    #[error("The analysis service did not respond within {0} seconds. Please try again.")]
    Timeout(u64),

    #[error("{0}")]
    Service(String),

    #[error("Unexpected response from the analysis service: {0}")]
    Protocol(String),
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::InvalidInput { .. } => ErrorKind::InvalidInput,
            AnalysisError::Timeout(_) => ErrorKind::Timeout,
            AnalysisError::Service(_) => ErrorKind::ServiceError,
            AnalysisError::Protocol(_) => ErrorKind::ProtocolError,
        }
    }
}
