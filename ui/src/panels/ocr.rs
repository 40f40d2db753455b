use api::model::OcrData;
use dioxus::prelude::*;

use crate::core::format::or_placeholder;
use crate::t;

const MISSING_FIELD: &str = "Not found";
const MISSING_TEXT: &str = "No text extracted";

#[derive(Debug, Clone, PartialEq)]
pub struct OcrView {
    pub fields: Vec<(&'static str, String)>,
    pub raw_text: String,
}

pub fn ocr_view(ocr: Option<&OcrData>) -> Option<OcrView> {
    let ocr = ocr?;
    let field = |value: &Option<String>| or_placeholder(value.as_deref(), MISSING_FIELD).to_string();
    Some(OcrView {
        fields: vec![
            ("Name", field(&ocr.name)),
            ("Course", field(&ocr.course)),
            ("Issuer", field(&ocr.issuer)),
            ("Date", field(&ocr.date)),
            ("Certificate ID", field(&ocr.certificate_id)),
        ],
        raw_text: or_placeholder(ocr.raw_text.as_deref(), MISSING_TEXT).to_string(),
    })
}

#[component]
pub fn OcrPanel(ocr: Option<OcrData>) -> Element {
    let Some(view) = ocr_view(ocr.as_ref()) else {
        return rsx! {};
    };

    rsx! {
        section { class: "panel panel-ocr",
            h3 { class: "panel__title", {t!("panel-ocr-title")} }
            dl { class: "panel__fields",
                for (label, value) in view.fields.iter() {
                    div { class: "panel__field", key: "{label}",
                        dt { "{label}" }
                        dd { "{value}" }
                    }
                }
            }
            h4 { class: "panel__subtitle", {t!("panel-ocr-raw-text")} }
            pre { class: "panel-ocr__raw", "{view.raw_text}" }
        }
    }
}
