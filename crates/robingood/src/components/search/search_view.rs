use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;
use instant::Instant;
use robingood_core::{ResultRecord, SearchOutcome, SearchSession, SearchTicket};

use crate::components::{use_scoring_service, ScoringServiceHandle};

use super::{ResultCard, SliderInput, TextInput};

/// Session state plus the submit action shared by the Enter key and the
/// Search button.
#[derive(Clone, Copy)]
pub(crate) struct SearchHandle {
    pub session: Signal<SearchSession>,
    pub submit: Callback<()>,
}

/// Owns the search session for one view.
///
/// Each accepted submit runs its request in its own task, so a slow or hung
/// request never holds up a newer one. Only the response for the newest
/// ticket is applied; anything older is dropped when it lands.
pub(crate) fn use_search() -> SearchHandle {
    let mut session = use_signal(SearchSession::new);
    let service = use_scoring_service();

    // Blank queries never reach the session's write path
    let submit = use_callback(move |_: ()| {
        if !session.read().has_query() {
            return;
        }
        let ticket = session.write().begin_search();
        if let Some(ticket) = ticket {
            spawn(run_search(session, service.clone(), ticket));
        }
    });

    SearchHandle { session, submit }
}

async fn run_search(
    mut session: Signal<SearchSession>,
    service: ScoringServiceHandle,
    ticket: SearchTicket,
) {
    info!("🔍 Searching for: '{}'", ticket.query());

    let start = Instant::now();
    let response = service.query(ticket.query()).await;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    // Failures are logged by the session
    match session.write().complete(ticket, response) {
        SearchOutcome::Applied { count } => {
            info!("✅ Search completed: {} results in {:.1}ms", count, elapsed_ms);
        }
        SearchOutcome::Stale => {
            debug!("Superseded search finished after {:.1}ms", elapsed_ms);
        }
        SearchOutcome::Failed(_) => {}
    }
}

/// Main search view: query field, risk slider, search button and result cards.
#[component]
pub fn SearchView() -> Element {
    let SearchHandle {
        mut session,
        submit,
    } = use_search();

    let query = session.read().query().to_string();
    let risk_tolerance = session.read().risk_tolerance();
    let results = session.read().results().to_vec();

    rsx! {
        section {
            class: "rg-view rg-view--search",

            section { class: "rg-search-card",
                TextInput {
                    query,
                    on_input: move |text: String| session.write().set_query(text),
                    on_submit: submit,
                }

                SliderInput {
                    value: risk_tolerance,
                    on_change: move |value| session.write().set_risk_tolerance(value),
                }

                div { class: "rg-search-actions",
                    button {
                        class: "rg-btn rg-btn--primary",
                        onclick: move |_| submit.call(()),
                        "Search"
                    }
                }
            }

            ResultList { results }
        }
    }
}

/// Result cards in response order, with a count header. Renders nothing for
/// an empty list.
#[component]
fn ResultList(results: Vec<ResultRecord>) -> Element {
    if results.is_empty() {
        return rsx! {};
    }

    let count = results.len();
    let result_word = if count == 1 { "result" } else { "results" };

    rsx! {
        section { class: "rg-results-section",
            header { class: "rg-results-header",
                span { class: "rg-results-count", "{count} {result_word}" }
            }

            div { class: "rg-results-grid",
                for (idx, record) in results.iter().enumerate() {
                    ResultCard {
                        key: "{idx}-{record.symbol}",
                        record: record.clone(),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ScoringServiceHandle;
    use async_trait::async_trait;
    use robingood_core::{parse_results, QueryError, ScoringService};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    /// Service that must never be reached during a plain render.
    struct UnreachableService;

    #[async_trait(?Send)]
    impl ScoringService for UnreachableService {
        async fn query(&self, text: &str) -> Result<Vec<ResultRecord>, QueryError> {
            panic!("unexpected query for {:?}", text);
        }
    }

    fn render_dom(mut dom: VirtualDom) -> String {
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn record(symbol: &str, name: &str, overall_risk: f64) -> ResultRecord {
        ResultRecord {
            symbol: symbol.to_string(),
            name: name.to_string(),
            overall_risk,
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_render_has_inputs_and_no_cards() {
        fn app() -> Element {
            use_context_provider(|| Rc::new(UnreachableService) as ScoringServiceHandle);
            rsx! { SearchView {} }
        }

        let html = render_dom(VirtualDom::new(app));
        assert!(html.contains("Enter search query"), "{html}");
        assert!(html.contains("Risk Tolerance: 50"), "{html}");
        assert!(html.contains("Search"));
        assert!(!html.contains("rg-result-card"));
    }

    #[derive(Props, Clone, PartialEq)]
    struct ListHarnessProps {
        results: Vec<ResultRecord>,
    }

    fn list_harness(props: ListHarnessProps) -> Element {
        rsx! { ResultList { results: props.results } }
    }

    fn render_list(results: Vec<ResultRecord>) -> String {
        render_dom(VirtualDom::new_with_props(
            list_harness,
            ListHarnessProps { results },
        ))
    }

    #[test]
    fn test_cards_follow_response_order() {
        let html = render_list(vec![
            record("TSLA", "Tesla", 1.8),
            record("XOM", "ExxonMobil", 1.5),
        ]);

        let tesla = html.find("Tesla (TSLA)").expect("TSLA card rendered");
        let exxon = html.find("ExxonMobil (XOM)").expect("XOM card rendered");
        assert!(tesla < exxon);
        assert!(html.contains("2 results"));
        assert!(html.contains("Risk Level: Moderate"));
        assert!(html.contains("Risk Level: Low"));
    }

    #[test]
    fn test_single_result_wording() {
        let html = render_list(vec![record("NEE", "NextEra Energy", 1.2)]);
        assert!(html.contains("1 result"));
        assert!(!html.contains("1 results"));
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        let html = render_list(Vec::new());
        assert!(!html.contains("rg-results-section"));
        assert!(!html.contains("rg-result-card"));
    }

    /// In-memory scoring service: "bad" answers with a non-array body,
    /// anything else with TSLA then XOM.
    #[derive(Default)]
    struct StubService {
        hits: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl ScoringService for StubService {
        async fn query(&self, text: &str) -> Result<Vec<ResultRecord>, QueryError> {
            self.hits.borrow_mut().push(text.to_string());
            match text.trim() {
                "bad" => parse_results(r#"{"error": "bad query"}"#),
                _ => Ok(vec![
                    record("TSLA", "Tesla", 1.8),
                    record("XOM", "ExxonMobil", 1.5),
                ]),
            }
        }
    }

    type HandleSlot = Rc<RefCell<Option<SearchHandle>>>;

    fn search_harness() -> Element {
        let search = use_search();
        let slot = use_context::<HandleSlot>();
        use_hook(|| *slot.borrow_mut() = Some(search));

        let results = search.session.read().results().to_vec();
        rsx! { ResultList { results } }
    }

    struct SearchFixture {
        dom: VirtualDom,
        handle: SearchHandle,
        service: Rc<StubService>,
    }

    impl SearchFixture {
        fn new() -> Self {
            let service = Rc::new(StubService::default());
            let slot: HandleSlot = Rc::default();
            let mut dom = VirtualDom::new(search_harness)
                .with_root_context(service.clone() as ScoringServiceHandle)
                .with_root_context(slot.clone());
            dom.rebuild_in_place();
            let handle = (*slot.borrow()).expect("harness stored its search handle");
            Self { dom, handle, service }
        }

        /// Types `query` and presses Search, then lets every task finish.
        async fn search(&mut self, query: &str) {
            let SearchHandle { mut session, submit } = self.handle;
            self.dom.in_scope(ScopeId::APP, || {
                session.write().set_query(query);
                submit.call(());
            });
            self.settle().await;
        }

        async fn settle(&mut self) {
            while tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work())
                .await
                .is_ok()
            {
                self.dom.render_immediate_to_vec();
            }
        }

        fn html(&self) -> String {
            dioxus_ssr::render(&self.dom)
        }

        fn hit_count(&self) -> usize {
            self.service.hits.borrow().len()
        }
    }

    #[tokio::test]
    async fn test_submit_renders_cards_in_response_order() {
        let mut fixture = SearchFixture::new();

        fixture.search("tesla").await;

        let html = fixture.html();
        let tesla = html.find("Tesla (TSLA)").expect("TSLA card rendered");
        let exxon = html.find("ExxonMobil (XOM)").expect("XOM card rendered");
        assert!(tesla < exxon);
        assert_eq!(fixture.hit_count(), 1);
    }

    #[tokio::test]
    async fn test_blank_submit_sends_no_request() {
        let mut fixture = SearchFixture::new();

        fixture.search("").await;
        fixture.search("   ").await;

        assert_eq!(fixture.hit_count(), 0);
        assert!(!fixture.html().contains("rg-result-card"));
    }

    #[tokio::test]
    async fn test_non_array_body_keeps_rendered_cards() {
        let mut fixture = SearchFixture::new();
        fixture.search("tesla").await;

        fixture.search("bad").await;

        let html = fixture.html();
        assert_eq!(fixture.hit_count(), 2);
        assert!(html.contains("Tesla (TSLA)"), "{html}");
        assert!(html.contains("ExxonMobil (XOM)"), "{html}");
        assert_eq!(fixture.handle.session.peek().query(), "bad");
    }
}
