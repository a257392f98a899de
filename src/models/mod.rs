//! Request and response records exchanged with the Opennote API.
//!
//! Response fields the service may omit are `Option` or `#[serde(default)]`
//! so that partial payloads (e.g. `success: false` with only a `message`)
//! still decode.

mod flashcards;
mod journals;
mod practice;
mod video;

use serde::{Deserialize, Serialize};

pub use flashcards::{Flashcard, FlashcardCreateRequest, FlashcardCreateResponse};
pub use journals::{JournalContentResponse, JournalSummary, JournalsListResponse};
pub(crate) use practice::GradeRequest;
pub use practice::{
    GradeFrqResponse, PracticeProblem, PracticeProblemSet, PracticeProblemSetCreateRequest,
    PracticeProblemSetCreateResponse, PracticeProblemSetStatusResponse, ProblemType,
};
pub use video::{
    Source, VideoApiResponse, VideoApiResponseData, VideoCreateRequest, VideoCreateResponse,
    VideoMessage, VideoStatusResponse,
};

/// Status of a server-side generation job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Completed,
    Success,
    Failed,
    NotFound,
    StatusError,
    /// A status string this SDK version does not know.
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    /// Terminal = anything but `pending`; the job won't change anymore.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, JobStatus::Pending)
    }

    /// `completed` or `success`.
    pub fn is_success(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Success)
    }
}

/// Implemented by status responses that the polling helpers can wait on.
pub trait JobStatusResponse {
    fn job_status(&self) -> JobStatus;
}

/// Token and credit accounting attached to generation results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub total_tokens_used: u64,
    pub total_input_tokens: u64,
    pub total_output_tokens: u64,
    pub search_credits_used: u64,
    /// USD.
    pub cost: f64,
}

/// GET /v1/health response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Any other fields the service reports.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_status_parses_all_known_values() {
        let cases = [
            ("pending", JobStatus::Pending),
            ("completed", JobStatus::Completed),
            ("success", JobStatus::Success),
            ("failed", JobStatus::Failed),
            ("not_found", JobStatus::NotFound),
            ("status_error", JobStatus::StatusError),
        ];
        for (raw, expected) in cases {
            let parsed: JobStatus = serde_json::from_value(serde_json::json!(raw)).unwrap();
            assert_eq!(parsed, expected);
        }
    }

    #[test]
    fn unknown_status_is_terminal() {
        let parsed: JobStatus = serde_json::from_str(r#""rendering""#).unwrap();
        assert_eq!(parsed, JobStatus::Unknown);
        assert!(parsed.is_terminal());
        assert!(!parsed.is_success());
    }

    #[test]
    fn only_pending_is_non_terminal() {
        assert!(!JobStatus::Pending.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
        assert!(JobStatus::NotFound.is_terminal());
        assert!(JobStatus::Completed.is_success());
        assert!(JobStatus::Success.is_success());
    }

    #[test]
    fn usage_tolerates_missing_fields() {
        let usage: Usage =
            serde_json::from_str(r#"{"total_tokens_used": 12, "cost": 0.5}"#).unwrap();
        assert_eq!(usage.total_tokens_used, 12);
        assert_eq!(usage.total_input_tokens, 0);
        assert_eq!(usage.cost, 0.5);
    }
}
