use dioxus::prelude::*;
use robingood::components::App as RobinGoodApp;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/robingood.css");

/// Chrome trace output for `--features profile` builds. Keep the guard alive
/// until exit; dropping it writes `./trace.json`.
#[cfg(feature = "profile")]
fn init_profiling() -> tracing_chrome::FlushGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let (chrome_layer, guard) = tracing_chrome::ChromeLayerBuilder::new()
        .file("./trace.json")
        .include_args(true)
        .build();

    // Spans from the UI toolkit and HTTP stack are filtered out
    let ours_only = EnvFilter::new("robingood=trace,robingood_core=trace");
    let stdout = fmt::layer()
        .with_target(true)
        .with_filter(EnvFilter::new("robingood=info,robingood_core=info"));

    tracing_subscriber::registry()
        .with(chrome_layer.with_filter(ours_only))
        .with(stdout)
        .init();

    tracing::info!("Writing profile to ./trace.json");
    guard
}

#[cfg(not(feature = "profile"))]
fn init_logging() {
    use dioxus::logger::tracing::Level;

    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("RobinGood: logger unavailable: {e}");
    }
}

fn main() {
    #[cfg(feature = "profile")]
    let _trace_guard = init_profiling();
    #[cfg(not(feature = "profile"))]
    init_logging();

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let window = WindowBuilder::new()
            .with_title("RobinGood")
            .with_inner_size(LogicalSize::new(1100.0, 800.0))
            .with_min_inner_size(LogicalSize::new(640.0, 480.0));

        dioxus::LaunchBuilder::desktop()
            .with_cfg(Config::default().with_window(window))
            .launch(App);
    }

    #[cfg(all(feature = "web", not(feature = "desktop")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }

        // Desktop webviews load the inlined copy
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/robingood.css")} }
        }

        body { class: "rg-body",
            RobinGoodApp {}
        }
    }
}
