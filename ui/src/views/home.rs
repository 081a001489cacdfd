use dioxus::prelude::*;

use crate::components::{activity_heatmap::today_local, ActivityHeatmap};

#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let today = use_hook(today_local);
    let records = use_hook(|| super::demo_records(today));

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { {crate::t!("home-intro")} }

            ActivityHeatmap { records, reference: today }

            p { class: "page-home__cta",
                {crate::t!("home-cta")}
            }
        }
    }
}
