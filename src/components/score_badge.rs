use leptos::prelude::*;

use crate::presenter::{ScoreBucket, Tone};

/// Colored pill for a score bucket.
#[component]
pub fn BucketBadge(bucket: ScoreBucket) -> impl IntoView {
    let icon = match bucket {
        ScoreBucket::Excellent => "\u{2713}",
        ScoreBucket::Good => "~",
        ScoreBucket::NeedsWork => "!",
    };
    let class = format!("score-badge {} {}", bucket.css_class(), bucket.tone().css_class());

    view! {
        <span class=class style=format!("border-color: {}", bucket.tone().hex())>
            <span class="score-icon">{icon}</span>
            <span class="score-text">{bucket.label()}</span>
        </span>
    }
}

/// Large overall similarity dial.
#[component]
pub fn OverallDial(
    #[prop(into)] display: String,
    tone: Tone,
    #[prop(into)] caption: String,
) -> impl IntoView {
    view! {
        <div class=format!("overall-dial {}", tone.css_class())>
            <span class="overall-value" style=format!("color: {}", tone.hex())>{display}</span>
            <span class="overall-caption">{caption}</span>
        </div>
    }
}
