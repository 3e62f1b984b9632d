//! Immutable reference tables: professionals, metric labels and coaching copy.
//!
//! The catalog is parsed once at startup and shared read-only. Nothing in the
//! presenter reaches for globals; callers pass a `&Catalog` explicitly.
//!
//! ```ignore
//! use swingpro::catalog::Catalog;
//! use swingpro::presenter::MetricKey;
//!
//! let catalog = Catalog::builtin();
//! let tiger = catalog.pro("tiger").unwrap();
//! println!("{} ({})", tiger.name, tiger.specialty);
//! println!("{}", catalog.metric(MetricKey::HipRotationSpeed).unwrap().label);
//! ```

mod types;

pub use types::*;

use std::collections::{BTreeMap, HashSet};

use crate::error::ConfigError;
use crate::presenter::{MetricKey, OverallTier};

/// Catalog embedded in the binary at compile time.
const BUILTIN_CATALOG: &str = include_str!("../../config/catalog.toml");

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pros: Vec<ProProfile>,
    metrics: BTreeMap<MetricKey, MetricInfo>,
    tiers: TierMessages,
}

impl Catalog {
    /// Parse and validate a catalog document.
    ///
    /// Every scored metric must have copy, and professional keys must be unique.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let file: CatalogFile = toml::from_str(content)?;

        for key in MetricKey::SCORED {
            if !file.metrics.contains_key(&key) {
                return Err(ConfigError::Invalid(format!(
                    "catalog has no entry for metric '{}'",
                    key.as_str()
                )));
            }
        }

        let mut seen = HashSet::new();
        for pro in &file.pros {
            if !seen.insert(pro.key.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate professional key '{}'",
                    pro.key
                )));
            }
        }

        Ok(Self {
            pros: file.pros,
            metrics: file.metrics,
            tiers: file.tiers,
        })
    }

    /// The catalog shipped with the app.
    ///
    /// # Panics
    /// Panics if the embedded TOML is invalid (a build-time bug, covered by tests).
    pub fn builtin() -> Self {
        Self::from_toml(BUILTIN_CATALOG).expect("embedded catalog.toml must be valid")
    }

    /// Professionals in display order.
    pub fn pros(&self) -> &[ProProfile] {
        &self.pros
    }

    pub fn pro(&self, key: &str) -> Option<&ProProfile> {
        self.pros.iter().find(|p| p.key == key)
    }

    pub fn metric(&self, key: MetricKey) -> Option<&MetricInfo> {
        self.metrics.get(&key)
    }

    /// Display label for a metric, falling back to the humanized key.
    pub fn metric_label(&self, key: MetricKey) -> String {
        self.metric(key)
            .map(|info| info.label.clone())
            .unwrap_or_else(|| humanize_key(key.as_str()))
    }

    /// Overall message for a tier, addressed to the chosen professional.
    pub fn tier_message(&self, tier: OverallTier, pro_name: &str) -> String {
        let template = match tier {
            OverallTier::Congratulatory => &self.tiers.congratulatory,
            OverallTier::Encouraging => &self.tiers.encouraging,
            OverallTier::Improvement => &self.tiers.improvement,
        };
        template.replace("{pro}", pro_name)
    }
}

/// Turn a snake_case key into a title ("knee_angle_match" -> "Knee Angle Match").
pub fn humanize_key(key: &str) -> String {
    key.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
