use adventure_yew::{App, AppConfig, AppProps};

fn main() {
    // Initialize tracing for WASM
    tracing_wasm::set_as_global_default();

    let config = AppConfig::from_build_env();
    tracing::info!(
        "Starting Local Adventure (service worker: {})",
        config.service_worker_path
    );

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
