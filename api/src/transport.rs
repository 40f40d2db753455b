//! Transport seam between the client and the network.

use futures::future::{FutureExt, LocalBoxFuture};
use reqwest::multipart::{Form, Part};

use crate::model::AnalysisRequest;

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The exchange failed before any response arrived.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("network error: {0}")]
pub struct TransportError(pub String);

/// Uploads one file as multipart form data to an absolute URL.
///
/// Futures are not required to be `Send`: on wasm the browser fetch is
/// single-threaded, and the Dioxus runtime polls everything on one thread.
pub trait Transport {
    fn upload(
        &self,
        url: String,
        request: AnalysisRequest,
    ) -> LocalBoxFuture<'_, Result<RawResponse, TransportError>>;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn upload(
        &self,
        url: String,
        request: AnalysisRequest,
    ) -> LocalBoxFuture<'_, Result<RawResponse, TransportError>> {
        async move {
            let (filename, mime, bytes) = request.into_parts();
            let part = Part::bytes(bytes)
                .file_name(filename)
                .mime_str(&mime)
                .map_err(network)?;
            let form = Form::new().part("file", part);

            let response = self
                .client
                .post(url)
                .multipart(form)
                .send()
                .await
                .map_err(network)?;
            let status = response.status().as_u16();
            let body = response.bytes().await.map_err(network)?;

            Ok(RawResponse::new(status, body.to_vec()))
        }
        .boxed_local()
    }
}

fn network(err: reqwest::Error) -> TransportError {
    TransportError(err.to_string())
}

impl<T: Transport + ?Sized> Transport for std::rc::Rc<T> {
    fn upload(
        &self,
        url: String,
        request: AnalysisRequest,
    ) -> LocalBoxFuture<'_, Result<RawResponse, TransportError>> {
        (**self).upload(url, request)
    }
}
