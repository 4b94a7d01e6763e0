use dioxus::prelude::*;

/// Top bar with the product name
#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "rg-header",
            h1 { class: "rg-header-title", "RobinGood" }
            span { class: "rg-header-tagline", "Invest in what you believe in" }
        }
    }
}
