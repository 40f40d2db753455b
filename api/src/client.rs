//! Single-attempt client for the analysis and hash endpoints.

use futures::future::{self, Either};
use futures::pin_mut;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::{service_config, ServiceConfig};
use crate::error::AnalysisError;
use crate::model::{AnalysisRequest, AnalysisResult, HashDigest};
use crate::timer;
use crate::transport::{HttpTransport, RawResponse, Transport};

pub const ANALYZE_PATH: &str = "/api/analyze-certificate";
pub const HASH_PATH: &str = "/api/generate-hash";

const ANALYZE_FAILED: &str = "Failed to analyze certificate. Please try again.";
const HASH_FAILED: &str = "Failed to generate certificate hash. Please try again.";

struct Endpoint {
    path: &'static str,
    generic_failure: &'static str,
}

const ANALYZE: Endpoint = Endpoint {
    path: ANALYZE_PATH,
    generic_failure: ANALYZE_FAILED,
};

const HASH: Endpoint = Endpoint {
    path: HASH_PATH,
    generic_failure: HASH_FAILED,
};

/// Error body shape used by the service (`{"detail": "..."}`). `detail` may
/// also be a structured validation list, which is not surfaced verbatim.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Performs exactly one outbound call per invocation: no retries, no cache.
#[derive(Debug, Clone)]
pub struct AnalysisClient<T = HttpTransport> {
    transport: T,
    config: ServiceConfig,
}

impl AnalysisClient<HttpTransport> {
    /// Client against the process-wide service configuration.
    pub fn from_env() -> Self {
        Self::new(HttpTransport::default(), service_config().clone())
    }
}

impl<T: Transport> AnalysisClient<T> {
    pub fn new(transport: T, config: ServiceConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Submits a certificate for the full analysis pipeline.
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        let response = self.exchange(&ANALYZE, request).await?;
        decode(&response.body)
    }

    /// Requests the SHA-256 fingerprint of the certificate text.
    pub async fn generate_hash(&self, request: AnalysisRequest) -> Result<HashDigest, AnalysisError> {
        let response = self.exchange(&HASH, request).await?;
        decode(&response.body)
    }

    async fn exchange(
        &self,
        endpoint: &Endpoint,
        request: AnalysisRequest,
    ) -> Result<RawResponse, AnalysisError> {
        let url = self.config.endpoint(endpoint.path);
        info!(%url, file = request.filename(), bytes = request.len(), "uploading certificate");

        let call = self.transport.upload(url, request);
        let deadline = timer::sleep(self.config.timeout);
        pin_mut!(deadline);

        // Losing the race drops the call future, so a late reply is never observed.
        match future::select(call, deadline).await {
            Either::Left((Ok(response), _)) if response.is_success() => {
                debug!(status = response.status, "service responded");
                Ok(response)
            }
            Either::Left((Ok(response), _)) => {
                let err = service_error(endpoint, &response);
                warn!(status = response.status, error = %err, "service rejected request");
                Err(err)
            }
            Either::Left((Err(err), _)) => {
                warn!(error = %err, "service unreachable");
                Err(AnalysisError::Service(endpoint.generic_failure.to_string()))
            }
            Either::Right(((), _)) => {
                let secs = self.config.timeout.as_secs_f64().ceil() as u64;
                warn!(timeout_secs = secs, "service call abandoned");
                Err(AnalysisError::Timeout(secs))
            }
        }
    }
}

fn decode<D: DeserializeOwned>(body: &[u8]) -> Result<D, AnalysisError> {
    serde_json::from_slice(body).map_err(|err| AnalysisError::Protocol(err.to_string()))
}

fn service_error(endpoint: &Endpoint, response: &RawResponse) -> AnalysisError {
    let detail = serde_json::from_slice::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.detail)
        .and_then(|detail| match detail {
            serde_json::Value::String(text) if !text.trim().is_empty() => Some(text),
            _ => None,
        });

    AnalysisError::Service(detail.unwrap_or_else(|| endpoint.generic_failure.to_string()))
}
