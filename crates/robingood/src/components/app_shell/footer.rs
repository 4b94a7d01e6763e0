use dioxus::prelude::*;

use crate::components::use_service_config;

/// Footer naming the scoring service the results come from
#[component]
pub fn Footer() -> Element {
    let config = use_service_config();

    rsx! {
        footer { class: "rg-footer",
            span { class: "rg-footer-text",
                "Scores from {config.base_url}"
            }
        }
    }
}
