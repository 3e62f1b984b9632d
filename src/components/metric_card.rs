use leptos::prelude::*;

use crate::components::score_badge::BucketBadge;
use crate::presenter::MetricCard;

/// One scored metric with its fill bar.
#[component]
pub fn MetricCardView(card: MetricCard) -> impl IntoView {
    view! {
        <div class=format!("metric-card {}", card.bucket.css_class())>
            <div class="metric-header">
                <span class="metric-name">{card.label.clone()}</span>
                <BucketBadge bucket=card.bucket />
            </div>
            <div class="metric-details">
                <div class="detail-row">
                    <div class="metric-bar">
                        <div
                            class="metric-fill"
                            style=format!("width: {}%; background: {}", card.bar_width, card.tone.hex())
                        ></div>
                    </div>
                    <span class="detail-value">{card.percent.clone()}</span>
                </div>
                {(!card.description.is_empty()).then(|| view! {
                    <p class="metric-description">{card.description.clone()}</p>
                })}
            </div>
        </div>
    }
}
