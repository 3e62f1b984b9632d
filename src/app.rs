use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::api::ApiClient;
use crate::catalog::Catalog;
use crate::components::site_nav::SiteNav;
use crate::config::AppConfig;
use crate::pages::analyze::AnalyzePage;
use crate::pages::health::HealthPage;
use crate::pages::home::HomePage;
use crate::pages::results::ResultsPage;

/// Read-only services shared by every page.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<Catalog>,
    pub api: ApiClient,
}

impl AppContext {
    pub fn new(config: AppConfig, catalog: Catalog) -> Self {
        Self {
            api: ApiClient::new(&config),
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(AppContext::new(config, Catalog::builtin()));

    view! {
        <Router>
            <div class="app-layout">
                <SiteNav />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/analyze") view=AnalyzePage />
                        <Route path=path!("/results") view=ResultsPage />
                        <Route path=path!("/health") view=HealthPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
