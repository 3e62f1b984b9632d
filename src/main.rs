use swingpro::app::App;
use swingpro::config::AppConfig;

fn main() {
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    swingpro::logging::init(&config);
    if let Some(e) = load_error {
        tracing::error!("Invalid app config, using defaults: {}", e);
    }
    tracing::info!("SwingPro client starting, API at {}", config.api_base_url);

    leptos::mount::mount_to_body(move || leptos::view! { <App config=config.clone() /> });
}
