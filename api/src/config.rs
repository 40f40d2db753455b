//! Service configuration, resolved once per process.

use std::time::Duration;

use once_cell::sync::Lazy;

/// Environment variable overriding the analysis service base URL.
pub const BASE_URL_ENV: &str = "EDUCRED_API_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// Upper bound on a single analysis call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Joins an endpoint path (leading slash expected) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

static SERVICE_CONFIG: Lazy<ServiceConfig> = Lazy::new(|| {
    let base_url = resolve_base_url(runtime_override(), option_env!("EDUCRED_API_URL"));
    tracing::info!(%base_url, "analysis service configured");
    ServiceConfig::new(base_url)
});

/// Process-wide configuration. Read on first use and immutable afterwards.
pub fn service_config() -> &'static ServiceConfig {
    &SERVICE_CONFIG
}

/// Runtime environment wins over the value baked in at compile time (the only
/// option on wasm); blank values are ignored.
pub fn resolve_base_url(runtime: Option<String>, compiled: Option<&str>) -> String {
    runtime
        .filter(|value| !value.trim().is_empty())
        .or_else(|| {
            compiled
                .filter(|value| !value.trim().is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_override() -> Option<String> {
    std::env::var(BASE_URL_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_override() -> Option<String> {
    None
}
