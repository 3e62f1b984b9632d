//! Coaching suggestions synthesized from metric thresholds.

use serde::{Deserialize, Serialize};

use super::classify::{classify_metric, ScoreBucket};
use super::types::{MetricKey, MetricSet};
use crate::catalog::Catalog;

/// Overall message tier chosen by the similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallTier {
    Congratulatory,
    Encouraging,
    Improvement,
}

impl OverallTier {
    /// `>= 80` congratulatory, `>= 60` encouraging, otherwise improvement.
    pub fn for_similarity(score: f64) -> Self {
        if score >= 80.0 {
            OverallTier::Congratulatory
        } else if score >= 60.0 {
            OverallTier::Encouraging
        } else {
            OverallTier::Improvement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OverallTier::Congratulatory => "Excellent Match",
            OverallTier::Encouraging => "Good Match",
            OverallTier::Improvement => "Room to Improve",
        }
    }
}

/// Build the ordered suggestion list for a metric set.
///
/// The first entry is always the overall-tier message. Each scored metric then
/// contributes its coaching tip when it lands in needs-work, in
/// [`MetricKey::SCORED`] order. Missing metrics read as zero.
pub fn synthesize_feedback(metrics: &MetricSet, pro_name: &str, catalog: &Catalog) -> Vec<String> {
    let tier = OverallTier::for_similarity(metrics.value_or_zero(MetricKey::OverallSimilarity));

    let mut lines = vec![catalog.tier_message(tier, pro_name)];
    lines.extend(
        MetricKey::SCORED
            .into_iter()
            .filter(|&key| classify_metric(key, metrics.value_or_zero(key)) == ScoreBucket::NeedsWork)
            .filter_map(|key| catalog.metric(key).map(|info| info.suggestion.clone())),
    );
    lines
}
