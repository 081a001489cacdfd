use dioxus::prelude::*;

use crate::components::{activity_heatmap::today_local, ActivityHeatmap};

#[component]
pub fn Activity() -> Element {
    // Hidden marker keeps a reactive dependency on the language signal.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let today = use_hook(today_local);
    let records = use_hook(|| super::demo_records(today));
    let title = crate::t!("page-activity-title");

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-activity",
            h1 { "{title}" }
            p { {crate::t!("page-activity-intro")} }
            ActivityHeatmap { records, title, reference: today }
        }
    }
}
