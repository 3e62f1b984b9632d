//! HTTP client for the analysis backend.
//!
//! Requests go through the browser `fetch` API. Response bodies are decoded by
//! [`decode_response`], which is plain Rust and shared by every endpoint.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

use crate::config::AppConfig;
use crate::error::ClientError;
use crate::form::SubmissionTicket;
use crate::presenter::AnalysisResult;

// -- Response types matching the backend --

/// `POST /analyze` success body. The backend echoes the full result; only the
/// session id is needed here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub session_id: Option<String>,
}

/// `GET /health` body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub endpoints: BTreeMap<String, String>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn analyze_url(&self) -> String {
        format!("{}/analyze", self.base_url)
    }

    pub fn results_url(&self, session_id: &str) -> String {
        format!("{}/results/{}", self.base_url, urlencoding::encode(session_id))
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }

    /// Upload a swing video for comparison. Returns the new session id.
    pub async fn analyze(
        &self,
        ticket: &SubmissionTicket,
        video: &web_sys::File,
    ) -> Result<String, ClientError> {
        let form = FormData::new().map_err(ClientError::network)?;
        form.append_with_str("pro_name", ticket.pro_key())
            .map_err(ClientError::network)?;
        form.append_with_blob_and_filename("video", video, ticket.video_name())
            .map_err(ClientError::network)?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&form);

        info!("POST {} ({} bytes)", self.analyze_url(), video.size());
        let (status, body) = send(&self.analyze_url(), &init).await?;
        let response: AnalyzeResponse = decode_response(status, &body)?;
        session_id_from(response)
    }

    /// Fetch a finished analysis by session id.
    pub async fn fetch_result(&self, session_id: &str) -> Result<AnalysisResult, ClientError> {
        if session_id.trim().is_empty() {
            return Err(ClientError::MissingSession);
        }

        let init = RequestInit::new();
        init.set_method("GET");

        info!("GET {}", self.results_url(session_id));
        let (status, body) = send(&self.results_url(session_id), &init).await?;
        decode_response(status, &body)
    }

    pub async fn health(&self) -> Result<HealthReport, ClientError> {
        let init = RequestInit::new();
        init.set_method("GET");

        let (status, body) = send(&self.health_url(), &init).await?;
        decode_response(status, &body)
    }
}

async fn send(url: &str, init: &RequestInit) -> Result<(u16, String), ClientError> {
    let window = web_sys::window()
        .ok_or_else(|| ClientError::Network("no browser window available".to_string()))?;

    let request = Request::new_with_str_and_init(url, init).map_err(ClientError::network)?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            warn!("fetch {} failed: {:?}", url, e);
            ClientError::network(e)
        })?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| ClientError::Decode("fetch did not return a Response".to_string()))?;

    let text = JsFuture::from(response.text().map_err(ClientError::network)?)
        .await
        .map_err(ClientError::network)?;

    Ok((response.status(), text.as_string().unwrap_or_default()))
}

/// Classify a response by status and body.
///
/// - non-2xx: [`ClientError::Http`], with the body's `error` text when present
/// - 2xx with an `error` field: [`ClientError::Application`]
/// - 2xx that is not the expected shape: [`ClientError::Decode`]
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ClientError> {
    let success = (200..300).contains(&status);

    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) if success => {
            debug!("undecodable body: {}", body);
            return Err(ClientError::Decode(e.to_string()));
        }
        Err(_) => {
            return Err(ClientError::Http {
                status,
                message: fallback_message(body),
            })
        }
    };

    if let Some(message) = error_message(&value) {
        return Err(if success {
            ClientError::Application(message)
        } else {
            ClientError::Http { status, message }
        });
    }
    if !success {
        return Err(ClientError::Http {
            status,
            message: fallback_message(body),
        });
    }

    serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
}

fn error_message(value: &serde_json::Value) -> Option<String> {
    match value.get("error")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn fallback_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "request failed".to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}

fn session_id_from(response: AnalyzeResponse) -> Result<String, ClientError> {
    response
        .session_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ClientError::Application("Server response did not include a session id".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::MetricKey;

    fn client() -> ApiClient {
        ApiClient::new(&AppConfig {
            api_base_url: "https://swing.example.com".to_string(),
            ..AppConfig::default()
        })
    }

    #[test]
    fn test_urls() {
        let api = client();
        assert_eq!(api.analyze_url(), "https://swing.example.com/analyze");
        assert_eq!(api.health_url(), "https://swing.example.com/health");
        assert_eq!(
            api.results_url("ab/cd 12"),
            "https://swing.example.com/results/ab%2Fcd%2012"
        );
    }

    #[test]
    fn test_decode_success() {
        let body = r#"{"session_id": "a1b2c3d4", "metrics": {"overall_similarity": 81}}"#;
        let result: AnalysisResult = decode_response(200, body).unwrap();
        assert_eq!(result.session_id, "a1b2c3d4");
        assert_eq!(result.metrics.unwrap().get(MetricKey::OverallSimilarity), Some(81.0));
    }

    #[test]
    fn test_error_field_on_success_status_is_application_error() {
        let err = decode_response::<AnalysisResult>(200, r#"{"error": "not found"}"#).unwrap_err();
        assert_eq!(err, ClientError::Application("not found".to_string()));
    }

    #[test]
    fn test_non_2xx_uses_error_text() {
        let err = decode_response::<AnalysisResult>(404, r#"{"error": "Session not found"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            ClientError::Http {
                status: 404,
                message: "Session not found".to_string()
            }
        );
    }

    #[test]
    fn test_non_2xx_without_json() {
        let err = decode_response::<AnalysisResult>(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(
            err,
            ClientError::Http {
                status: 502,
                message: "<html>Bad Gateway</html>".to_string()
            }
        );

        let err = decode_response::<AnalysisResult>(500, "").unwrap_err();
        assert!(matches!(err, ClientError::Http { status: 500, .. }));
    }

    #[test]
    fn test_non_2xx_with_json_but_no_error_field() {
        let err = decode_response::<HealthReport>(503, r#"{"status": "down"}"#).unwrap_err();
        assert!(matches!(err, ClientError::Http { status: 503, .. }));
    }

    #[test]
    fn test_null_error_is_ignored() {
        let report: HealthReport =
            decode_response(200, r#"{"status": "healthy", "error": null}"#).unwrap();
        assert!(report.is_healthy());
    }

    #[test]
    fn test_malformed_success_body_is_decode_error() {
        let err = decode_response::<AnalysisResult>(200, "not json").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));

        let err = decode_response::<HealthReport>(200, r#"{"message": "no status"}"#).unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn test_analyze_response_requires_session_id() {
        let response: AnalyzeResponse = decode_response(200, r#"{"summary": "ok"}"#).unwrap();
        assert!(matches!(session_id_from(response), Err(ClientError::Application(_))));

        let response: AnalyzeResponse =
            decode_response(200, r#"{"session_id": "f00dcafe", "pro_name": "tiger"}"#).unwrap();
        assert_eq!(session_id_from(response).unwrap(), "f00dcafe");
    }

    #[test]
    fn test_health_report_decode() {
        let body = r#"{
            "status": "healthy",
            "message": "Golf swing analyzer API is running",
            "endpoints": {
                "analyze": "POST /analyze - Analyze swing and compare with pro",
                "health": "GET /health - Health check"
            }
        }"#;
        let report: HealthReport = decode_response(200, body).unwrap();
        assert!(report.is_healthy());
        assert_eq!(report.endpoints.len(), 2);
    }
}
