use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::HealthReport;
use crate::app::use_app_context;
use crate::components::service_status::{ServiceState, ServiceStatusRow};

#[component]
pub fn HealthPage() -> impl IntoView {
    let ctx = use_app_context();
    let (checking, set_checking) = signal(false);
    let (report, set_report) = signal::<Option<HealthReport>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let api = ctx.api.clone();
    let do_health_check = move || {
        set_checking.set(true);
        set_error.set(None);
        let api = api.clone();
        spawn_local(async move {
            match api.health().await {
                Ok(r) => set_report.set(Some(r)),
                Err(e) => {
                    set_report.set(None);
                    set_error.set(Some(format!("Service check failed: {}", e)));
                }
            }
            set_checking.set(false);
        });
    };

    // Check once on mount
    let auto_check = do_health_check.clone();
    Effect::new(move |_| {
        auto_check();
    });

    let base_url = ctx.api.base_url().to_string();

    view! {
        <div class="page health-page">
            <h2>"Service Status"</h2>
            <p class="page-description">
                "Check that the swing analysis service at " <code>{base_url}</code> " is reachable."
            </p>

            <button
                class="btn btn-primary"
                on:click=move |_| do_health_check()
                disabled=move || checking.get()
            >
                {move || if checking.get() { "Checking..." } else { "Check Again" }}
            </button>

            {move || error.get().map(|e| view! {
                <div class="health-error">
                    <ServiceStatusRow label="Analysis API" state=ServiceState::Offline detail=e />
                </div>
            })}

            {move || report.get().map(|r| {
                let state = ServiceState::from_report(Some(&r));
                view! {
                    <div class="health-results">
                        <ServiceStatusRow label="Analysis API" state=state detail=r.message.clone() />
                        {r.endpoints.into_iter().map(|(name, description)| view! {
                            <ServiceStatusRow label=name state=state detail=description />
                        }).collect::<Vec<_>>()}
                    </div>
                }
            })}
        </div>
    }
}
