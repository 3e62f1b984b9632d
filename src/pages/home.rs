use leptos::prelude::*;

use crate::app::use_app_context;

const STEPS: [(&str, &str, &str); 3] = [
    ("1", "Choose Your Pro", "Select from our library of professional golfers"),
    ("2", "Upload Your Swing", "Record and upload a video of your golf swing"),
    ("3", "Get AI Analysis", "Receive a similarity score and personalized tips"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="page home-page">
            <section class="hero">
                <h2>"Swing Like the Pros"</h2>
                <p class="page-description">
                    "Compare your golf swing with tour professionals and get AI-powered feedback in minutes."
                </p>
                <a href="/analyze" class="btn btn-primary">"Analyze My Swing"</a>
            </section>

            <section class="how-it-works">
                <h3>"How It Works"</h3>
                <div class="steps">
                    {STEPS.into_iter().map(|(number, title, text)| view! {
                        <div class="step">
                            <span class="step-number">{number}</span>
                            <div class="step-content">
                                <strong>{title}</strong>
                                <p>{text}</p>
                            </div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </section>

            <section class="pro-roster">
                <h3>"Compare With"</h3>
                <div class="card-grid">
                    {ctx.catalog.pros().iter().map(|pro| view! {
                        <div class="card pro-card">
                            <img src=pro.image.clone() alt=pro.name.clone() class="pro-portrait" />
                            <h4>{pro.name.clone()}</h4>
                            <span class="pro-specialty">{pro.specialty.clone()}</span>
                            <p>{pro.description.clone()}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}
