use api::{AnalysisClient, AnalysisRequest, HashDigest};
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::components::FileUpload;
use crate::core::platform;
use crate::t;
use crate::workflow::SelectedFile;

#[derive(Clone, Debug, PartialEq)]
enum HashStatus {
    Idle,
    Working(String),
    Done { filename: String, digest: HashDigest },
    Error(String),
}

/// Fingerprints a certificate's extracted text without running the full analysis.
#[component]
pub fn HashCheck() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut status = use_signal(|| HashStatus::Idle);
    let busy = matches!(status(), HashStatus::Working(_));

    let on_select = move |file: SelectedFile| {
        if matches!(*status.peek(), HashStatus::Working(_)) {
            return;
        }
        let request = match AnalysisRequest::from_file(file.name, file.bytes) {
            Ok(request) => request,
            Err(err) => {
                status.set(HashStatus::Error(err.to_string()));
                return;
            }
        };
        let filename = request.filename().to_string();
        status.set(HashStatus::Working(filename.clone()));
        platform::spawn_future(async move {
            let client = AnalysisClient::from_env();
            match client.generate_hash(request).await {
                Ok(digest) => {
                    info!(file = %filename, "hash generated");
                    status.set(HashStatus::Done { filename, digest });
                }
                Err(err) => {
                    warn!(file = %filename, kind = %err.kind(), "hash generation failed");
                    status.set(HashStatus::Error(err.to_string()));
                }
            }
        });
    };

    let body = match status() {
        HashStatus::Idle => rsx! {},
        HashStatus::Working(filename) => rsx! {
            p { class: "hash__working", role: "status", {t!("hash-working", file = filename)} }
        },
        HashStatus::Done { filename, digest } => {
            let length = digest
                .text_length
                .map(|n| n.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            let source = digest.source_used.clone().unwrap_or_else(|| "N/A".to_string());
            rsx! {
                div { class: "panel hash__result",
                    h3 { class: "panel__title", "{filename}" }
                    dl { class: "panel__fields",
                        div { class: "panel__field",
                            dt { {t!("hash-sha256")} }
                            dd { code { class: "hash__digest", "{digest.sha256}" } }
                        }
                        div { class: "panel__field",
                            dt { {t!("hash-text-length")} }
                            dd { "{length}" }
                        }
                        div { class: "panel__field",
                            dt { {t!("hash-source")} }
                            dd { "{source}" }
                        }
                    }
                }
            }
        }
        HashStatus::Error(message) => rsx! {
            div { class: "analysis__error", role: "alert",
                span { class: "analysis__error-text", "⚠️ {message}" }
            }
        },
    };

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-hash",
            h1 { {t!("hash-title")} }
            p { class: "page__intro", {t!("hash-intro")} }
            FileUpload { disabled: busy, on_select }
            {body}
        }
    }
}
