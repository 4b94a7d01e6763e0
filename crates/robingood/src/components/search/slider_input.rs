use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use robingood_core::RiskTolerance;

/// Controlled risk-tolerance slider over `[1, 100]`, step 1.
///
/// Values coming back from the range input are rounded and clamped before
/// reaching `on_change`; anything unparsable is dropped.
#[component]
pub fn SliderInput(value: RiskTolerance, on_change: EventHandler<RiskTolerance>) -> Element {
    let label = value.label();
    let (min, max) = (RiskTolerance::MIN, RiskTolerance::MAX);

    rsx! {
        div { class: "rg-slider",
            p { class: "rg-slider-label", "{label}" }
            input {
                class: "rg-slider-range",
                r#type: "range",
                min: "{min}",
                max: "{max}",
                step: "1",
                value: "{value}",
                "aria-label": "Risk tolerance",
                oninput: move |evt| match RiskTolerance::parse(&evt.value()) {
                    Some(tolerance) => on_change.call(tolerance),
                    None => warn!("Ignoring slider value {:?}", evt.value()),
                },
            }
            div { class: "rg-slider-scale",
                span { "{min}" }
                span { "{max}" }
            }
        }
    }
}
