//! Client crate for the EduCred certificate analysis service.
//!
//! Holds the wire model, the error taxonomy and the HTTP plumbing. Nothing in
//! here knows about rendering; the `ui` crate drives it from the workflow
//! orchestrator.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod timer;
pub mod transport;

pub use client::AnalysisClient;
pub use config::ServiceConfig;
pub use error::{AnalysisError, ErrorKind};
pub use model::{AnalysisRequest, AnalysisResult, HashDigest};
pub use transport::{HttpTransport, RawResponse, Transport, TransportError};
