use api::model::MetadataData;
use dioxus::prelude::*;

use crate::core::format::{flag_is_alarming, or_placeholder};
use crate::t;

const MISSING: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct FlagView {
    pub text: String,
    pub alarming: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetadataView {
    pub rows: Vec<(&'static str, String)>,
    pub flags: Vec<FlagView>,
}

pub fn metadata_view(metadata: Option<&MetadataData>) -> Option<MetadataView> {
    let metadata = metadata?;
    let row = |value: &Option<String>| or_placeholder(value.as_deref(), MISSING).to_string();
    Some(MetadataView {
        rows: vec![
            ("Created", row(&metadata.created_date)),
            ("Modified", row(&metadata.modified_date)),
            ("Author", row(&metadata.author)),
            ("Software", row(&metadata.software)),
        ],
        flags: metadata
            .flags
            .iter()
            .map(|flag| FlagView {
                text: flag.clone(),
                alarming: flag_is_alarming(flag),
            })
            .collect(),
    })
}

#[component]
pub fn MetadataPanel(metadata: Option<MetadataData>) -> Element {
    let Some(view) = metadata_view(metadata.as_ref()) else {
        return rsx! {};
    };

    rsx! {
        section { class: "panel panel-metadata",
            h3 { class: "panel__title", {t!("panel-metadata-title")} }
            dl { class: "panel__fields",
                for (label, value) in view.rows.iter() {
                    div { class: "panel__field", key: "{label}",
                        dt { "{label}" }
                        dd { "{value}" }
                    }
                }
            }
            if !view.flags.is_empty() {
                h4 { class: "panel__subtitle", {t!("panel-metadata-flags")} }
                ul { class: "panel-metadata__flags",
                    for flag in view.flags.iter() {
                        li {
                            class: if flag.alarming { "flag flag--alarming" } else { "flag" },
                            "{flag.text}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_fall_back_and_flags_are_classified() {
        let metadata = MetadataData {
            author: Some("Registrar".into()),
            flags: vec![
                "Modified after creation".into(),
                "Producer: LibreOffice".into(),
                "SUSPICIOUS font mix".into(),
            ],
            ..MetadataData::default()
        };
        let view = metadata_view(Some(&metadata)).expect("metadata present");
        assert_eq!(view.rows[0].1, "N/A");
        assert_eq!(view.rows[2].1, "Registrar");
        let alarming: Vec<bool> = view.flags.iter().map(|flag| flag.alarming).collect();
        assert_eq!(alarming, vec![true, false, true]);
    }
}
