//! UI components for the RobinGood application.
//!
//! - `app_shell`: Header, Footer
//! - `search`: SearchView, TextInput, SliderInput, ResultCard
//!
//! # Context Providers
//!
//! [`App`] provides the scoring service and its configuration:
//!
//! ```ignore
//! let service = use_scoring_service();
//! let records = service.query("clean energy").await?;
//!
//! let config = use_service_config();
//! info!("Querying {}", config.base_url);
//! ```

mod app_shell;
pub mod search;

pub use app_shell::{Footer, Header};
pub use search::{ResultCard, SearchView, SliderInput, TextInput};

use std::rc::Rc;

use dioxus::prelude::*;
use robingood_core::{HttpScoringService, ScoringService, ServiceConfig};

/// Shared handle to whatever answers search queries.
///
/// `Rc` rather than `Arc`: the UI runs on a single thread and reqwest
/// futures are not `Send` on WASM.
pub type ScoringServiceHandle = Rc<dyn ScoringService>;

// Scoring service context provider
pub fn use_scoring_service() -> ScoringServiceHandle {
    use_context::<ScoringServiceHandle>()
}

// Service configuration context provider
pub fn use_service_config() -> ServiceConfig {
    use_context::<ServiceConfig>()
}

/// Root component: provides context and lays out the shell around the search view.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(ServiceConfig::default);
    use_context_provider(move || Rc::new(HttpScoringService::new(config)) as ScoringServiceHandle);

    rsx! {
        div { class: "rg-app",
            Header {}

            main { class: "rg-main",
                SearchView {}
            }

            Footer {}
        }
    }
}
