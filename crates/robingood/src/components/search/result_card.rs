use dioxus::prelude::*;
use robingood_core::{ResultRecord, RiskLevel};

/// One scored stock: name, ticker, ESG breakdown, sector and risk level.
///
/// Pure rendering; no state and no events.
#[component]
pub fn ResultCard(record: ResultRecord) -> Element {
    let risk = record.risk_level();
    let risk_class = match risk {
        RiskLevel::Low => "rg-result-risk rg-result-risk--low",
        RiskLevel::Moderate => "rg-result-risk rg-result-risk--moderate",
        RiskLevel::High => "rg-result-risk rg-result-risk--high",
    };

    // Percentage bar widths
    let esg_pct = score_pct(record.total_esg);

    rsx! {
        article { class: "rg-result-card",
            header { class: "rg-result-header",
                h3 { class: "rg-result-title", "{record.name} ({record.symbol})" }
            }

            div { class: "rg-result-score",
                span { class: "rg-score-value", "ESG Score: {record.total_esg}/100" }
                div { class: "rg-progress-bar",
                    span { style: "width: {esg_pct}%;" }
                }
            }

            ul { class: "rg-result-breakdown",
                li { "Environmental Score: {record.environment_score}/100" }
                li { "Social Score: {record.social_score}/100" }
                li { "Governance Score: {record.governance_score}/100" }
            }

            footer { class: "rg-result-footer",
                span { class: "rg-result-sector", "Sector: {record.sector}" }
                span { class: risk_class, "Risk Level: {risk}" }
            }
        }
    }
}

/// Clamps a 0-100 score for use as a CSS width.
fn score_pct(score: f64) -> u32 {
    if score.is_finite() {
        score.clamp(0.0, 100.0).round() as u32
    } else {
        0
    }
}
