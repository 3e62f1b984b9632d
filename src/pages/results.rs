//! Results page, addressed as `/results?session=<id>`.
//!
//! The result is fetched fresh on every load; nothing is cached across reloads.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use tracing::warn;
use wasm_bindgen_futures::spawn_local;

use crate::app::use_app_context;
use crate::components::result_report::{NoDataPanel, ResultReportDisplay};
use crate::error::ClientError;
use crate::presenter::{present, ResultView};

#[derive(Debug, Clone, PartialEq)]
enum ResultsState {
    Loading,
    Ready(ResultView),
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    let ctx = use_app_context();
    let query = use_query_map();
    let (state, set_state) = signal(ResultsState::Loading);

    Effect::new(move |_| {
        let session = query
            .with(|q| q.get("session"))
            .filter(|id| !id.trim().is_empty());

        let Some(session_id) = session else {
            set_state.set(ResultsState::Ready(ResultView::from_error(&ClientError::MissingSession)));
            return;
        };

        set_state.set(ResultsState::Loading);
        let api = ctx.api.clone();
        let catalog = ctx.catalog.clone();
        spawn_local(async move {
            let view = match api.fetch_result(&session_id).await {
                Ok(result) => present(&result, &catalog),
                Err(e) => {
                    warn!("Could not load session {}: {}", session_id, e);
                    ResultView::from_error(&e)
                }
            };
            set_state.set(ResultsState::Ready(view));
        });
    });

    view! {
        <div class="page results-page">
            <h2>"Your Swing Analysis"</h2>

            {move || match state.get() {
                ResultsState::Loading => view! {
                    <div class="loading-indicator">
                        <div class="spinner"></div>
                        <p>"Loading your results..."</p>
                    </div>
                }.into_any(),
                ResultsState::Ready(ResultView::Report(report)) => view! {
                    <ResultReportDisplay report=*report />
                }.into_any(),
                ResultsState::Ready(ResultView::NoData(empty)) => view! {
                    <NoDataPanel empty=empty />
                }.into_any(),
            }}
        </div>
    }
}
