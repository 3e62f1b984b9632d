//! Upload form state machine.
//!
//! ```text
//! Idle --submit(valid)--> Submitting --session id--> Succeeded (navigate)
//!   ^                          |
//!   +-------- error -----------+
//! ```
//!
//! An invalid submit never leaves `Idle`. The analyze request needs a
//! [`SubmissionTicket`], which only [`UploadForm::begin_submit`] hands out.

use thiserror::Error;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::ClientError;

/// Metadata of the video chosen in the file input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSelection {
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a professional to compare against.")]
    MissingPro,

    #[error("Please choose a swing video to upload.")]
    MissingVideo,

    #[error("Unsupported video type '{extension}'. Use one of: {allowed}.")]
    UnsupportedType { extension: String, allowed: String },

    #[error("Video is too large ({size_mb} MB). The limit is {limit_mb} MB.")]
    TooLarge { size_mb: u64, limit_mb: u32 },

    #[error("An analysis is already in progress.")]
    InProgress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Succeeded { session_id: String },
}

/// Message shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Validation(ValidationError),
    Failure(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Validation(err) => err.to_string(),
            Notice::Failure(msg) => format!("Analysis failed: {}", msg),
        }
    }
}

/// Proof that the form validated. Required to send the analyze request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    pro_key: String,
    video_name: String,
}

impl SubmissionTicket {
    pub fn pro_key(&self) -> &str {
        &self.pro_key
    }

    pub fn video_name(&self) -> &str {
        &self.video_name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadForm {
    pro: Option<String>,
    video: Option<VideoSelection>,
    state: SubmitState,
    notice: Option<Notice>,
}

impl Default for UploadForm {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadForm {
    pub fn new() -> Self {
        Self {
            pro: None,
            video: None,
            state: SubmitState::Idle,
            notice: None,
        }
    }

    pub fn select_pro(&mut self, key: &str) {
        let key = key.trim();
        self.pro = (!key.is_empty()).then(|| key.to_string());
        self.clear_validation();
    }

    pub fn select_video(&mut self, video: Option<VideoSelection>) {
        self.video = video;
        self.clear_validation();
    }

    pub fn pro(&self) -> Option<&str> {
        self.pro.as_deref()
    }

    pub fn video(&self) -> Option<&VideoSelection> {
        self.video.as_ref()
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// Whether the submit control accepts clicks.
    pub fn controls_enabled(&self) -> bool {
        self.state == SubmitState::Idle
    }

    pub fn validate(&self, config: &AppConfig) -> Result<(), ValidationError> {
        if self.pro.is_none() {
            return Err(ValidationError::MissingPro);
        }
        let video = self.video.as_ref().ok_or(ValidationError::MissingVideo)?;

        let extension = video_extension(&video.name).unwrap_or_default();
        if !config.allowed_video_extensions.iter().any(|e| *e == extension) {
            return Err(ValidationError::UnsupportedType {
                extension: if extension.is_empty() { "(none)".to_string() } else { extension },
                allowed: config.allowed_video_extensions.join(", "),
            });
        }

        if video.size > config.max_video_bytes() {
            return Err(ValidationError::TooLarge {
                size_mb: video.size.div_ceil(1024 * 1024),
                limit_mb: config.max_video_mb,
            });
        }
        Ok(())
    }

    /// Idle -> Submitting. On a validation error the form stays idle and shows it.
    pub fn begin_submit(&mut self, config: &AppConfig) -> Result<SubmissionTicket, ValidationError> {
        if self.state != SubmitState::Idle {
            return Err(ValidationError::InProgress);
        }
        if let Err(err) = self.validate(config) {
            warn!("Upload form rejected: {}", err);
            self.notice = Some(Notice::Validation(err.clone()));
            return Err(err);
        }

        let (Some(pro_key), Some(video)) = (self.pro.clone(), self.video.as_ref()) else {
            return Err(ValidationError::MissingVideo);
        };
        info!("Submitting {} for comparison with {}", video.name, pro_key);

        self.state = SubmitState::Submitting;
        self.notice = None;
        Ok(SubmissionTicket {
            pro_key,
            video_name: video.name.clone(),
        })
    }

    /// Submitting -> Succeeded or back to Idle with the error shown.
    ///
    /// Returns the results route to navigate to on success.
    pub fn complete(&mut self, outcome: Result<String, ClientError>) -> Option<String> {
        if self.state != SubmitState::Submitting {
            return None;
        }
        match outcome {
            Ok(session_id) => {
                info!("Analysis accepted, session {}", session_id);
                let path = results_path(&session_id);
                self.state = SubmitState::Succeeded { session_id };
                Some(path)
            }
            Err(err) => {
                warn!("Analysis failed: {}", err);
                self.state = SubmitState::Idle;
                self.notice = Some(Notice::Failure(err.to_string()));
                None
            }
        }
    }

    fn clear_validation(&mut self) {
        if matches!(self.notice, Some(Notice::Validation(_))) {
            self.notice = None;
        }
    }
}

/// Route of the results page for a session.
pub fn results_path(session_id: &str) -> String {
    format!("/results?session={}", urlencoding::encode(session_id))
}

/// Lowercase extension of a file name, without the dot.
pub fn video_extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(name: &str, size: u64) -> Option<VideoSelection> {
        Some(VideoSelection {
            name: name.to_string(),
            size,
        })
    }

    fn ready_form() -> UploadForm {
        let mut form = UploadForm::new();
        form.select_pro("tiger");
        form.select_video(video("my_swing.mp4", 4 * 1024 * 1024));
        form
    }

    #[test]
    fn test_missing_video_stays_idle() {
        let config = AppConfig::default();
        let mut form = UploadForm::new();
        form.select_pro("tiger");

        let result = form.begin_submit(&config);
        assert_eq!(result, Err(ValidationError::MissingVideo));
        assert_eq!(form.state(), &SubmitState::Idle);
        assert!(form.controls_enabled());
        assert_eq!(form.notice(), Some(&Notice::Validation(ValidationError::MissingVideo)));
    }

    #[test]
    fn test_missing_pro_checked_first() {
        let config = AppConfig::default();
        let mut form = UploadForm::new();
        form.select_pro("   ");
        assert_eq!(form.begin_submit(&config), Err(ValidationError::MissingPro));
        assert!(form.controls_enabled());
    }

    #[test]
    fn test_unsupported_extension() {
        let config = AppConfig::default();
        let mut form = ready_form();
        form.select_video(video("swing.gif", 1024));
        match form.begin_submit(&config) {
            Err(ValidationError::UnsupportedType { extension, allowed }) => {
                assert_eq!(extension, "gif");
                assert_eq!(allowed, "mp4, avi, mov, mkv");
            }
            other => panic!("unexpected: {:?}", other),
        }

        form.select_video(video("swing", 1024));
        assert!(matches!(
            form.begin_submit(&config),
            Err(ValidationError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let config = AppConfig::default();
        let mut form = ready_form();
        form.select_video(video("Range Session.MOV", 1024));
        assert!(form.begin_submit(&config).is_ok());
    }

    #[test]
    fn test_too_large() {
        let config = AppConfig {
            max_video_mb: 10,
            ..AppConfig::default()
        };
        let mut form = ready_form();
        form.select_video(video("swing.mp4", 10 * 1024 * 1024 + 1));
        assert_eq!(
            form.begin_submit(&config),
            Err(ValidationError::TooLarge {
                size_mb: 11,
                limit_mb: 10
            })
        );
    }

    #[test]
    fn test_valid_submit_issues_ticket() {
        let config = AppConfig::default();
        let mut form = ready_form();
        let ticket = form.begin_submit(&config).unwrap();
        assert_eq!(ticket.pro_key(), "tiger");
        assert_eq!(ticket.video_name(), "my_swing.mp4");
        assert!(form.is_submitting());
        assert!(!form.controls_enabled());
    }

    #[test]
    fn test_double_submit_rejected() {
        let config = AppConfig::default();
        let mut form = ready_form();
        form.begin_submit(&config).unwrap();
        assert_eq!(form.begin_submit(&config), Err(ValidationError::InProgress));
        assert!(form.is_submitting());
    }

    #[test]
    fn test_success_navigates_to_results() {
        let config = AppConfig::default();
        let mut form = ready_form();
        form.begin_submit(&config).unwrap();

        let path = form.complete(Ok("a1b2 c3".to_string()));
        assert_eq!(path.as_deref(), Some("/results?session=a1b2%20c3"));
        assert_eq!(
            form.state(),
            &SubmitState::Succeeded {
                session_id: "a1b2 c3".to_string()
            }
        );
    }

    #[test]
    fn test_failure_returns_to_idle_with_message() {
        let config = AppConfig::default();
        let mut form = ready_form();
        form.begin_submit(&config).unwrap();

        let path = form.complete(Err(ClientError::Application(
            "No pose landmarks detected in video".to_string(),
        )));
        assert!(path.is_none());
        assert!(form.controls_enabled());
        assert_eq!(
            form.notice().map(|n| n.message()),
            Some("Analysis failed: No pose landmarks detected in video".to_string())
        );

        // the same form can be submitted again
        assert!(form.begin_submit(&config).is_ok());
    }

    #[test]
    fn test_complete_ignored_when_not_submitting() {
        let mut form = ready_form();
        assert!(form.complete(Ok("abc".to_string())).is_none());
        assert_eq!(form.state(), &SubmitState::Idle);
    }

    #[test]
    fn test_changing_selection_clears_validation_notice() {
        let config = AppConfig::default();
        let mut form = UploadForm::new();
        form.select_pro("rory");
        let _ = form.begin_submit(&config);
        assert!(form.notice().is_some());

        form.select_video(video("swing.mkv", 1024));
        assert!(form.notice().is_none());
    }

    #[test]
    fn test_video_extension() {
        assert_eq!(video_extension("a.b.MP4").as_deref(), Some("mp4"));
        assert_eq!(video_extension(".mp4"), None);
        assert_eq!(video_extension("swing."), None);
        assert_eq!(video_extension("swing"), None);
    }
}
