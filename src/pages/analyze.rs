//! Upload page: pick a professional, attach a swing video, submit for analysis.
//!
//! The file input is the single source of truth for the chosen video. Dropped
//! files are written back into it, so submit always reads one place.

use leptos::html::Input;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::app::use_app_context;
use crate::components::pro_preview::ProPreview;
use crate::error::ClientError;
use crate::form::{UploadForm, VideoSelection};

#[component]
pub fn AnalyzePage() -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(UploadForm::new());
    let (preview_url, set_preview_url) = signal::<Option<String>>(None);
    let (is_over, set_is_over) = signal(false);
    let file_input = NodeRef::<Input>::new();
    let navigate = use_navigate();

    on_cleanup(move || {
        if let Some(url) = preview_url.get_untracked() {
            revoke_preview(&url);
        }
    });

    // Sync form state and preview with whatever the file input now holds
    let take_selection = move || {
        let file = file_input.get().and_then(|input| input.files()).and_then(|files| files.get(0));

        if let Some(old) = preview_url.get_untracked() {
            revoke_preview(&old);
        }
        set_preview_url.set(file.as_ref().and_then(create_preview));

        form.update(|f| {
            f.select_video(file.map(|file| VideoSelection {
                name: file.name(),
                size: file.size() as u64,
            }))
        });
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);
        if form.with_untracked(|f| f.is_submitting()) {
            return;
        }
        let files = ev.data_transfer().and_then(|dt| dt.files());
        if let (Some(files), Some(input)) = (files, file_input.get()) {
            input.set_files(Some(&files));
            take_selection();
        }
    };

    let catalog = ctx.catalog.clone();
    let pro_preview = move || {
        form.with(|f| f.pro().and_then(|key| catalog.pro(key).cloned()))
            .map(|profile| view! { <ProPreview profile=profile /> })
    };

    let config = ctx.config.clone();
    let api = ctx.api.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let ticket = match form.try_update(|f| f.begin_submit(&config)) {
            Some(Ok(ticket)) => ticket,
            _ => return,
        };

        let file = file_input.get().and_then(|input| input.files()).and_then(|files| files.get(0));
        let Some(file) = file else {
            form.update(|f| {
                f.complete(Err(ClientError::Application(
                    "The selected video is no longer available. Please choose it again.".to_string(),
                )));
            });
            return;
        };

        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = api.analyze(&ticket, &file).await;
            if let Some(path) = form.try_update(|f| f.complete(outcome)).flatten() {
                navigate(&path, Default::default());
            }
        });
    };

    let accept = ctx
        .config
        .allowed_video_extensions
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",");
    let formats_hint = format!(
        "Supports {} up to {} MB",
        ctx.config.allowed_video_extensions.join(", ").to_uppercase(),
        ctx.config.max_video_mb
    );

    view! {
        <div class="page analyze-page">
            <h2>"Analyze Your Swing"</h2>
            <p class="page-description">
                "Pick a professional to compare against and upload a video of your swing."
            </p>

            <form class="analysis-form" on:submit=on_submit>
                <div class="pro-selector">
                    <label for="pro-select">"Compare with:"</label>
                    <select
                        id="pro-select"
                        class="input"
                        prop:disabled=move || form.with(|f| f.is_submitting())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.select_pro(&value));
                        }
                    >
                        <option value="">"Select a professional"</option>
                        {ctx.catalog.pros().iter().map(|pro| view! {
                            <option value=pro.key.clone()>{pro.name.clone()}</option>
                        }).collect::<Vec<_>>()}
                    </select>
                    {pro_preview}
                </div>

                <div
                    class="drop-zone"
                    class:drop-zone-active=move || is_over.get()
                    on:dragover=move |ev: web_sys::DragEvent| {
                        ev.prevent_default();
                        set_is_over.set(true);
                    }
                    on:dragleave=move |_| set_is_over.set(false)
                    on:drop=on_drop
                >
                    <div class="drop-zone-content">
                        <p class="drop-main">"Drop your swing video here"</p>
                        <p class="drop-hint">"or"</p>
                        <label for="swing-video" class="btn btn-secondary">"Browse Files"</label>
                        <input
                            type="file"
                            id="swing-video"
                            accept=accept
                            style="display: none"
                            node_ref=file_input
                            on:change=move |_| take_selection()
                        />
                        <p class="drop-formats">{formats_hint}</p>
                        {move || form.with(|f| f.video().map(|v| v.name.clone())).map(|name| view! {
                            <p class="drop-selected">"Selected: " <strong>{name}</strong></p>
                        })}
                    </div>
                </div>

                {move || preview_url.get().map(|src| view! {
                    <video src=src class="video-preview" controls=true></video>
                })}

                {move || form.with(|f| f.notice().map(|n| n.message())).map(|msg| view! {
                    <div class="form-notice error-message">{msg}</div>
                })}

                <div class="action-buttons">
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || !form.with(|f| f.controls_enabled())
                    >
                        {move || if form.with(|f| f.is_submitting()) { "Analyzing..." } else { "Analyze Swing" }}
                    </button>
                </div>

                <Show when=move || form.with(|f| f.is_submitting())>
                    <div class="loading-indicator">
                        <div class="spinner"></div>
                        <p>"Uploading and analyzing your swing..."</p>
                        <p class="hint">"This may take a minute for longer videos"</p>
                    </div>
                </Show>
            </form>
        </div>
    }
}

fn create_preview(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file)
        .map_err(|e| tracing::warn!("Could not create video preview: {:?}", e))
        .ok()
}

fn revoke_preview(url: &str) {
    if let Err(e) = web_sys::Url::revoke_object_url(url) {
        tracing::debug!("Could not revoke preview URL {}: {:?}", url, e);
    }
}
