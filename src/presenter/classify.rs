//! Qualitative scoring of metric values.
//!
//! Metric buckets use strict comparisons; similarity colors use inclusive ones.
//! Both are kept exactly as the product defines them.

use serde::{Deserialize, Serialize};

use super::types::MetricKey;

/// Qualitative classification of a single metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreBucket {
    Excellent,
    Good,
    NeedsWork,
}

impl ScoreBucket {
    pub fn label(self) -> &'static str {
        match self {
            ScoreBucket::Excellent => "Excellent",
            ScoreBucket::Good => "Good",
            ScoreBucket::NeedsWork => "Needs Work",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            ScoreBucket::Excellent => Tone::Green,
            ScoreBucket::Good => Tone::Amber,
            ScoreBucket::NeedsWork => Tone::Red,
        }
    }

    /// CSS modifier, e.g. `score-needs-work`.
    pub fn css_class(self) -> &'static str {
        match self {
            ScoreBucket::Excellent => "score-excellent",
            ScoreBucket::Good => "score-good",
            ScoreBucket::NeedsWork => "score-needs-work",
        }
    }
}

/// Display color shared by buckets and the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Green,
    Amber,
    Red,
}

impl Tone {
    pub fn hex(self) -> &'static str {
        match self {
            Tone::Green => "#2e9e5b",
            Tone::Amber => "#e0a100",
            Tone::Red => "#d64545",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Green => "tone-green",
            Tone::Amber => "tone-amber",
            Tone::Red => "tone-red",
        }
    }
}

/// Bucket for a metric given by its wire key. Unknown keys are `Good`.
pub fn classify(key: &str, value: f64) -> ScoreBucket {
    MetricKey::from_key(key)
        .map(|k| classify_metric(k, value))
        .unwrap_or(ScoreBucket::Good)
}

/// Bucket for a known metric.
pub fn classify_metric(key: MetricKey, value: f64) -> ScoreBucket {
    match key {
        // lower is better
        MetricKey::KneeAngleStd | MetricKey::ShoulderStability => {
            if value < 0.02 {
                ScoreBucket::Excellent
            } else if value < 0.05 {
                ScoreBucket::Good
            } else {
                ScoreBucket::NeedsWork
            }
        }
        // higher is better
        MetricKey::HipRotationSpeed | MetricKey::BackswingHeight => {
            if value > 0.1 {
                ScoreBucket::Excellent
            } else if value > 0.05 {
                ScoreBucket::Good
            } else {
                ScoreBucket::NeedsWork
            }
        }
        MetricKey::PoseStability => {
            if value > 0.8 {
                ScoreBucket::Excellent
            } else if value > 0.6 {
                ScoreBucket::Good
            } else {
                ScoreBucket::NeedsWork
            }
        }
        MetricKey::OverallSimilarity => ScoreBucket::Good,
    }
}

/// Color for a 0-100 similarity score.
pub fn similarity_tone(score: f64) -> Tone {
    if score >= 80.0 {
        Tone::Green
    } else if score >= 60.0 {
        Tone::Amber
    } else {
        Tone::Red
    }
}
