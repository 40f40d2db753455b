use api::model::EncodedImage;
use dioxus::prelude::*;

use super::image::image_data_url;
use crate::t;

pub fn preview_source(image: Option<&EncodedImage>) -> Option<String> {
    image.filter(|image| !image.is_empty()).map(image_data_url)
}

#[component]
pub fn CertificatePreview(image: Option<EncodedImage>) -> Element {
    let Some(src) = preview_source(image.as_ref()) else {
        return rsx! {};
    };

    rsx! {
        section { class: "panel panel-preview",
            h3 { class: "panel__title", {t!("panel-preview-title")} }
            div { class: "panel-preview__frame",
                img { src: "{src}", alt: "Certificate preview" }
            }
        }
    }
}
