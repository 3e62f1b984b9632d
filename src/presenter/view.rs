//! View-model builder for the results page.

use chrono::{DateTime, NaiveDateTime};
use serde::Serialize;

use super::classify::{classify_metric, similarity_tone, ScoreBucket, Tone};
use super::feedback::{synthesize_feedback, OverallTier};
use super::types::{AnalysisResult, MetricKey};
use crate::catalog::{humanize_key, Catalog};
use crate::error::ClientError;

const TIMESTAMP_DISPLAY: &str = "%B %-d, %Y at %-I:%M %p";

/// Everything the results page renders, or the reason it cannot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ResultView {
    Report(Box<ResultReport>),
    NoData(NoDataView),
}

/// Explicit empty state with a way back to the upload form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoDataView {
    pub title: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultReport {
    pub overall: OverallScore,
    pub metrics: Vec<MetricCard>,
    /// Tier message first, then one tip per metric needing work
    pub suggestions: Vec<String>,
    /// Backend feedback strings, humanized
    pub feedback: Vec<FeedbackLine>,
    pub pro: ProSummary,
    pub summary: Option<String>,
    pub session: SessionMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallScore {
    pub value: f64,
    /// e.g. "72%"
    pub display: String,
    pub tone: Tone,
    pub tier: OverallTier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub key: MetricKey,
    pub label: String,
    pub description: String,
    pub value: f64,
    /// `value * 100` with one decimal, e.g. "6.0%"
    pub percent: String,
    /// Bar fill in percent, clamped to 0..=100
    pub bar_width: f64,
    pub bucket: ScoreBucket,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackLine {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProSummary {
    pub key: String,
    pub name: String,
    pub specialty: Option<String>,
    pub image: Option<String>,
    pub video: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionMeta {
    pub session_id: String,
    pub timestamp: String,
}

impl ResultView {
    pub fn no_data(reason: impl Into<String>) -> Self {
        ResultView::NoData(NoDataView {
            title: "No analysis data found".to_string(),
            reason: reason.into(),
        })
    }

    /// Empty state for a failed or impossible results fetch.
    pub fn from_error(err: &ClientError) -> Self {
        match err {
            ClientError::MissingSession => ResultView::NoData(NoDataView {
                title: "No session".to_string(),
                reason: "No analysis session was provided. Upload a swing to get started.".to_string(),
            }),
            other => ResultView::no_data(other.to_string()),
        }
    }

    pub fn is_report(&self) -> bool {
        matches!(self, ResultView::Report(_))
    }
}

/// Map an analysis result to its view model.
///
/// Pure: the same result and catalog always produce the same view. A result
/// without metrics or without a similarity score yields [`ResultView::NoData`].
pub fn present(result: &AnalysisResult, catalog: &Catalog) -> ResultView {
    let Some(metrics) = result.metrics.as_ref() else {
        return ResultView::no_data("The analysis did not include any swing metrics.");
    };
    let Some(similarity) = metrics.similarity() else {
        return ResultView::no_data("The analysis is missing an overall similarity score.");
    };

    let pro = pro_summary(&result.pro_name, catalog);

    let overall = OverallScore {
        value: similarity,
        display: format!("{:.0}%", similarity),
        tone: similarity_tone(similarity),
        tier: OverallTier::for_similarity(similarity),
    };

    let cards = MetricKey::SCORED
        .into_iter()
        .map(|key| {
            let value = metrics.value_or_zero(key);
            let bucket = classify_metric(key, value);
            let info = catalog.metric(key);
            MetricCard {
                key,
                label: catalog.metric_label(key),
                description: info.map(|i| i.description.clone()).unwrap_or_default(),
                value,
                percent: format!("{:.1}%", value * 100.0),
                bar_width: (value * 100.0).clamp(0.0, 100.0),
                bucket,
                tone: bucket.tone(),
            }
        })
        .collect();

    let feedback = result
        .feedback
        .iter()
        .filter(|(key, _)| key.as_str() != MetricKey::OverallSimilarity.as_str())
        .map(|(key, value)| FeedbackLine {
            label: humanize_key(key),
            value: value.clone(),
        })
        .collect();

    ResultView::Report(Box::new(ResultReport {
        overall,
        metrics: cards,
        suggestions: synthesize_feedback(metrics, &pro.name, catalog),
        feedback,
        summary: result.summary.clone().filter(|s| !s.trim().is_empty()),
        session: SessionMeta {
            session_id: result.session_id.clone(),
            timestamp: format_timestamp(&result.timestamp),
        },
        pro,
    }))
}

fn pro_summary(key: &str, catalog: &Catalog) -> ProSummary {
    match catalog.pro(key) {
        Some(profile) => ProSummary {
            key: profile.key.clone(),
            name: profile.name.clone(),
            specialty: Some(profile.specialty.clone()),
            image: Some(profile.image.clone()),
            video: profile.video.clone(),
        },
        None => ProSummary {
            key: key.to_string(),
            name: if key.is_empty() { "the pro".to_string() } else { key.to_string() },
            specialty: None,
            image: None,
            video: None,
        },
    }
}

/// Render a backend timestamp for humans, e.g. "May 1, 2024 at 2:05 PM".
///
/// Accepts RFC 3339 (kept in its own offset) and offset-less ISO datetimes with
/// optional fractional seconds. Anything else is returned verbatim.
pub fn format_timestamp(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.naive_local().format(TIMESTAMP_DISPLAY).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return dt.format(TIMESTAMP_DISPLAY).to_string();
        }
    }
    raw.to_string()
}
