use dioxus::prelude::*;

use crate::t;
use crate::workflow::AnalysisView;

#[component]
pub fn Dashboard() -> Element {
    // Re-render on locale switches made in the navbar.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-dashboard",
            h1 { {t!("dashboard-title")} }
            p { class: "page__intro", {t!("dashboard-intro")} }
            AnalysisView {}
        }
    }
}
