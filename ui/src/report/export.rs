use std::rc::Rc;

use api::AnalysisResult;
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use time::OffsetDateTime;

use super::{build_report, ReportError};
use crate::core::platform;
use crate::t;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working,
    Done(String),
    Error(String),
}

#[component]
pub fn ReportExportButton(result: Option<Rc<AnalysisResult>>) -> Element {
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working => Some(("report-export__meta".to_string(), t!("report-preparing"))),
        ExportStatus::Done(message) => Some((
            "report-export__meta report-export__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "report-export__meta report-export__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let on_export = {
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working);
            let result = result.clone();
            platform::spawn_future(async move {
                let outcome = deliver_report(result.as_deref(), OffsetDateTime::now_utc()).await;
                match outcome {
                    Ok(Some(path)) => status_signal.set(ExportStatus::Done(t!(
                        "report-saved",
                        path = path
                    ))),
                    Ok(None) => status_signal.set(ExportStatus::Done(t!("report-downloaded"))),
                    Err(err) => status_signal.set(ExportStatus::Error(err.to_string())),
                }
                busy_signal.set(false);
            });
        }
    };

    rsx! {
        div { class: "report-export",
            button {
                r#type: "button",
                class: "button button--primary",
                disabled: busy(),
                onclick: on_export,
                {t!("report-download")}
            }
            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

/// Builds the report and hands it to the platform. Returns the saved path on
/// desktop; the browser download yields `None`.
pub async fn deliver_report(
    result: Option<&AnalysisResult>,
    at: OffsetDateTime,
) -> Result<Option<String>, ReportError> {
    let artifact = build_report(result, at)?;
    let delivered = download_bytes(&artifact.filename, artifact.mime, artifact.bytes)
        .await
        .map_err(ReportError::Delivery);
    match &delivered {
        Ok(_) => info!(file = %artifact.filename, "report exported"),
        Err(err) => warn!(file = %artifact.filename, error = %err, "report export failed"),
    }
    delivered
}

async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;

        let _ = mime;
        let dir = desktop_export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        fs::write(&path, &bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("com", "EduCred", "EduCred")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}
