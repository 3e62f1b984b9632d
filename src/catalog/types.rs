//! Reference data types loaded from `config/catalog.toml`.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::presenter::MetricKey;

/// Root document of the catalog TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFile {
    /// Professionals in display order
    pub pros: Vec<ProProfile>,
    /// Label and coaching copy per scored metric
    pub metrics: BTreeMap<MetricKey, MetricInfo>,
    /// Overall-tier message templates
    pub tiers: TierMessages,
}

/// A reference professional the user can compare against.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProProfile {
    /// Short identifier sent to the backend as `pro_name` (e.g., "tiger")
    pub key: String,
    /// Display name
    pub name: String,
    pub description: String,
    /// One-word specialty tag shown on the preview (e.g., "Power")
    pub specialty: String,
    /// Portrait URL
    pub image: String,
    /// Embeddable reference swing video, if one is known
    #[serde(default)]
    pub video: Option<String>,
}

/// Display copy for one metric.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetricInfo {
    pub label: String,
    pub description: String,
    /// Coaching tip shown when the metric lands in needs-work
    pub suggestion: String,
}

/// Overall-tier templates. `{pro}` is replaced with the professional's name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TierMessages {
    pub congratulatory: String,
    pub encouraging: String,
    pub improvement: String,
}
