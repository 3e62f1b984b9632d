//! Results display for a finished swing analysis.
//!
//! Renders a [`ResultReport`] view model; all scoring happens in the presenter.

use leptos::prelude::*;

use crate::components::metric_card::MetricCardView;
use crate::components::score_badge::OverallDial;
use crate::presenter::{NoDataView, ProSummary, ResultReport};

#[component]
pub fn ResultReportDisplay(report: ResultReport) -> impl IntoView {
    let ResultReport {
        overall,
        metrics,
        suggestions,
        feedback,
        pro,
        summary,
        session,
    } = report;

    view! {
        <div class="result-report">
            <div class="overall-section">
                <h3>"Overall Similarity"</h3>
                <OverallDial display=overall.display tone=overall.tone caption=overall.tier.label() />
                {summary.map(|s| view! { <p class="overall-summary">{s}</p> })}
            </div>

            <ProComparison pro=pro />

            <div class="metrics-section">
                <h3>"Swing Breakdown"</h3>
                <div class="metrics-grid">
                    {metrics.into_iter().map(|card| view! {
                        <MetricCardView card=card />
                    }).collect::<Vec<_>>()}
                </div>
            </div>

            <div class="ai-feedback">
                <h3>"AI Analysis & Feedback"</h3>
                <ul class="suggestion-list">
                    {suggestions.into_iter().map(|line| view! {
                        <li class="suggestion">{line}</li>
                    }).collect::<Vec<_>>()}
                </ul>
            </div>

            {(!feedback.is_empty()).then(|| view! {
                <div class="feedback-section">
                    <h3>"Technique Checks"</h3>
                    <dl class="feedback-list">
                        {feedback.into_iter().map(|line| view! {
                            <div class="feedback-row">
                                <dt>{line.label}</dt>
                                <dd>{line.value}</dd>
                            </div>
                        }).collect::<Vec<_>>()}
                    </dl>
                </div>
            })}

            <div class="session-meta">
                <span class="meta-item">"Session " <code>{session.session_id}</code></span>
                {(!session.timestamp.is_empty()).then(|| view! {
                    <span class="meta-item">"Analyzed " {session.timestamp}</span>
                })}
            </div>

            <div class="action-buttons">
                <a href="/analyze" class="btn btn-secondary">"Try Another Swing"</a>
            </div>
        </div>
    }
}

#[component]
fn ProComparison(pro: ProSummary) -> impl IntoView {
    view! {
        <div class="pro-comparison">
            <h3>{format!("Compared with {}", pro.name)}</h3>
            {pro.image.map(|src| view! {
                <img src=src alt=pro.name.clone() class="pro-portrait" />
            })}
            {pro.specialty.map(|tag| view! { <span class="pro-specialty">{tag}</span> })}
            {pro.video.map(|href| view! {
                <a href=href target="_blank" rel="noopener" class="btn btn-outline">
                    "View Pro Swing Video"
                </a>
            })}
        </div>
    }
}

/// Explicit empty state for missing or failed results.
#[component]
pub fn NoDataPanel(empty: NoDataView) -> impl IntoView {
    view! {
        <div class="error-state">
            <div class="error-message">
                <h3>{empty.title}</h3>
                <p>{empty.reason}</p>
            </div>
            <a href="/analyze" class="btn btn-secondary">"Go Back and Try Again"</a>
        </div>
    }
}
