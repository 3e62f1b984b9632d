use std::path::PathBuf;

use swingpro::api::{decode_response, HealthReport};
use swingpro::catalog::Catalog;
use swingpro::error::ClientError;
use swingpro::presenter::*;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("Failed to read fixture file")
}

fn load_result(name: &str) -> AnalysisResult {
    decode_response(200, &read_fixture(name)).expect("Fixture should decode")
}

fn report(view: ResultView) -> ResultReport {
    match view {
        ResultView::Report(report) => *report,
        ResultView::NoData(empty) => panic!("Expected a report, got empty state: {:?}", empty),
    }
}

#[test]
fn test_backend_payload_decodes_with_extra_metrics() {
    let result = load_result("session_full.json");
    let metrics = result.metrics.as_ref().expect("metrics present");

    assert_eq!(result.session_id, "3f9c2a1b");
    assert_eq!(metrics.similarity(), Some(72.0));
    assert_eq!(metrics.get(MetricKey::PoseStability), Some(0.91));
    // Keys the client does not render are kept
    assert_eq!(metrics.raw().get("knee_angle_mean"), Some(&0.412));
    assert_eq!(metrics.raw().len(), 10);
    // Integer feedback is carried as text
    assert_eq!(result.feedback.get("overall_similarity").map(String::as_str), Some("72"));
}

#[test]
fn test_full_report_from_fixture() {
    let catalog = Catalog::builtin();
    let report = report(present(&load_result("session_full.json"), &catalog));

    assert_eq!(report.overall.display, "72%");
    assert_eq!(report.overall.tone, Tone::Amber);
    assert_eq!(report.overall.tier, OverallTier::Encouraging);

    assert_eq!(report.pro.name, "Tiger Woods");
    assert!(report.pro.video.is_some());

    let buckets: Vec<(MetricKey, ScoreBucket)> =
        report.metrics.iter().map(|card| (card.key, card.bucket)).collect();
    assert_eq!(
        buckets,
        vec![
            (MetricKey::KneeAngleStd, ScoreBucket::NeedsWork),
            (MetricKey::HipRotationSpeed, ScoreBucket::NeedsWork),
            (MetricKey::BackswingHeight, ScoreBucket::Excellent),
            (MetricKey::ShoulderStability, ScoreBucket::Excellent),
            (MetricKey::PoseStability, ScoreBucket::Excellent),
        ]
    );
    assert_eq!(report.metrics[0].percent, "6.1%");
    assert!((report.metrics[4].bar_width - 91.0).abs() < 1e-9);

    assert_eq!(report.suggestions.len(), 3);
    assert!(report.suggestions[0].contains("Tiger Woods"));
    assert!(report.suggestions[1].starts_with("Knee stability"));
    assert!(report.suggestions[2].starts_with("Hip rotation"));

    let labels: Vec<&str> = report.feedback.iter().map(|line| line.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Backswing Height",
            "Hip Rotation Timing",
            "Knee Angle Match",
            "Movement Consistency",
            "Shoulder Stability",
        ]
    );

    assert_eq!(
        report.summary.as_deref(),
        Some("Your swing shows 72% similarity to tiger's technique")
    );
    assert_eq!(report.session.session_id, "3f9c2a1b");
    assert_eq!(report.session.timestamp, "May 1, 2024 at 2:05 PM");
}

#[test]
fn test_present_is_idempotent() {
    let catalog = Catalog::builtin();
    let result = load_result("session_full.json");

    let first = present(&result, &catalog);
    let second = present(&result, &catalog);
    assert_eq!(first, second);
}

#[test]
fn test_missing_metrics_is_empty_state() {
    let catalog = Catalog::builtin();
    let view = present(&load_result("session_no_metrics.json"), &catalog);

    assert!(!view.is_report());
    match view {
        ResultView::NoData(empty) => assert_eq!(empty.title, "No analysis data found"),
        other => panic!("Expected empty state, got {:?}", other),
    }
}

#[test]
fn test_unknown_session_becomes_empty_state() {
    let body = read_fixture("session_not_found.json");
    let err = decode_response::<AnalysisResult>(404, &body).unwrap_err();
    assert_eq!(
        err,
        ClientError::Http {
            status: 404,
            message: "Session not found".to_string()
        }
    );

    match ResultView::from_error(&err) {
        ResultView::NoData(empty) => assert!(empty.reason.contains("Session not found")),
        other => panic!("Expected empty state, got {:?}", other),
    }
}

#[test]
fn test_error_body_with_success_status() {
    let body = read_fixture("session_not_found.json");
    let err = decode_response::<AnalysisResult>(200, &body).unwrap_err();
    assert_eq!(err, ClientError::Application("Session not found".to_string()));
}

#[test]
fn test_feedback_rules_for_reference_scores() {
    let catalog = Catalog::builtin();
    let metrics = MetricSet::new()
        .with(MetricKey::OverallSimilarity, 85.0)
        .with(MetricKey::KneeAngleStd, 0.06)
        .with(MetricKey::HipRotationSpeed, 0.03)
        .with(MetricKey::BackswingHeight, 0.15)
        .with(MetricKey::ShoulderStability, 0.01)
        .with(MetricKey::PoseStability, 0.9);

    let lines = synthesize_feedback(&metrics, "Rory McIlroy", &catalog);
    assert_eq!(
        lines[0],
        catalog.tier_message(OverallTier::Congratulatory, "Rory McIlroy")
    );
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("Knee stability"));
    assert!(lines[2].starts_with("Hip rotation"));
}

#[test]
fn test_health_fixture_decodes() {
    let report: HealthReport = decode_response(200, &read_fixture("health_ok.json")).expect("decode");
    assert!(report.is_healthy());
    assert_eq!(report.endpoints.len(), 3);
    assert!(report.endpoints.contains_key("analyze"));
}
