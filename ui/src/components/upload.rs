use std::sync::Arc;

use dioxus::html::{FileEngine, HasFileData};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::t;
use crate::workflow::SelectedFile;

/// PDF picker with a drop zone. Only the first file of a selection is used;
/// type checking is left to the workflow so every entry point validates alike.
#[component]
pub fn FileUpload(disabled: bool, on_select: EventHandler<SelectedFile>) -> Element {
    let mut dragging = use_signal(|| false);

    let zone_class = match (disabled, dragging()) {
        (true, _) => "upload upload--disabled",
        (false, true) => "upload upload--dragging",
        (false, false) => "upload",
    };

    rsx! {
        label {
            class: zone_class,
            r#for: "certificate-input",
            ondragover: move |evt| {
                evt.prevent_default();
                if !disabled {
                    dragging.set(true);
                }
            },
            ondragleave: move |_| dragging.set(false),
            ondrop: move |evt: DragEvent| async move {
                evt.prevent_default();
                dragging.set(false);
                if disabled {
                    return;
                }
                if let Some(file) = first_file(evt.files()).await {
                    on_select.call(file);
                }
            },
            input {
                id: "certificate-input",
                class: "upload__input",
                r#type: "file",
                accept: ".pdf,application/pdf",
                disabled,
                onchange: move |evt: FormEvent| async move {
                    if let Some(file) = first_file(evt.files()).await {
                        on_select.call(file);
                    }
                },
            }
            span { class: "upload__icon", aria_hidden: "true", "📄" }
            span { class: "upload__title",
                if disabled {
                    {t!("upload-processing")}
                } else {
                    {t!("upload-prompt")}
                }
            }
            span { class: "upload__hint", {t!("upload-hint")} }
        }
    }
}

async fn first_file(engine: Option<Arc<dyn FileEngine>>) -> Option<SelectedFile> {
    let engine = engine?;
    let name = engine.files().into_iter().next()?;
    match engine.read_file(&name).await {
        Some(bytes) => Some(SelectedFile::from_engine_key(&name, bytes)),
        None => {
            warn!(file = %name, "selected file could not be read");
            None
        }
    }
}
