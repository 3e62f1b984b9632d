//! Analysis payload as returned by the backend.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// The metrics the client knows how to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    KneeAngleStd,
    HipRotationSpeed,
    BackswingHeight,
    ShoulderStability,
    PoseStability,
    /// Aggregate 0-100 score, not rendered as a card
    OverallSimilarity,
}

impl MetricKey {
    pub const ALL: [MetricKey; 6] = [
        MetricKey::KneeAngleStd,
        MetricKey::HipRotationSpeed,
        MetricKey::BackswingHeight,
        MetricKey::ShoulderStability,
        MetricKey::PoseStability,
        MetricKey::OverallSimilarity,
    ];

    /// Per-aspect metrics in presentation order. Feedback rules follow this order too.
    pub const SCORED: [MetricKey; 5] = [
        MetricKey::KneeAngleStd,
        MetricKey::HipRotationSpeed,
        MetricKey::BackswingHeight,
        MetricKey::ShoulderStability,
        MetricKey::PoseStability,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MetricKey::KneeAngleStd => "knee_angle_std",
            MetricKey::HipRotationSpeed => "hip_rotation_speed",
            MetricKey::BackswingHeight => "backswing_height",
            MetricKey::ShoulderStability => "shoulder_stability",
            MetricKey::PoseStability => "pose_stability",
            MetricKey::OverallSimilarity => "overall_similarity",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

/// Flat metric map. Keys the client does not know are kept but never rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricSet(BTreeMap<String, f64>);

impl MetricSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: MetricKey, value: f64) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: MetricKey, value: f64) {
        self.0.insert(key.as_str().to_string(), value);
    }

    pub fn get(&self, key: MetricKey) -> Option<f64> {
        self.0.get(key.as_str()).copied()
    }

    /// Missing metrics read as zero.
    pub fn value_or_zero(&self, key: MetricKey) -> f64 {
        self.get(key).unwrap_or(0.0)
    }

    pub fn similarity(&self) -> Option<f64> {
        self.get(MetricKey::OverallSimilarity)
    }

    pub fn raw(&self) -> &BTreeMap<String, f64> {
        &self.0
    }
}

impl FromIterator<(MetricKey, f64)> for MetricSet {
    fn from_iter<I: IntoIterator<Item = (MetricKey, f64)>>(iter: I) -> Self {
        let mut set = MetricSet::new();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}

/// Result of one analysis session (`GET /results/{id}`).
///
/// Every field is optional on the wire so a partial payload still decodes and the
/// presenter can report what is missing instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub session_id: String,
    /// Professional key the swing was compared against (e.g., "tiger")
    #[serde(default)]
    pub pro_name: String,
    /// ISO-8601 timestamp as produced by the backend
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub metrics: Option<MetricSet>,
    /// Free-text feedback keyed by aspect. Non-string values keep their JSON text.
    #[serde(default, deserialize_with = "feedback_text")]
    pub feedback: BTreeMap<String, String>,
    /// One-line backend summary, when provided
    #[serde(default)]
    pub summary: Option<String>,
}

fn feedback_text<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| {
            let text = match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            (key, text)
        })
        .collect())
}
