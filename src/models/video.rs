use serde::{Deserialize, Serialize};

use super::{JobStatus, JobStatusResponse, Usage};

/// One chat turn describing the video to generate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VideoMessage {
    /// e.g. "user", "system".
    pub role: String,
    pub content: String,
}

impl VideoMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// Input for `Video::create`.
///
/// Exactly one of `messages` or `script` should be set; the service rejects
/// the request otherwise (the client does not check).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VideoCreateRequest {
    /// Defaults to `picasso` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<VideoMessage>>,
    /// Pre-written narration, one entry per section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_sources: Option<bool>,
    /// Web search query used to gather sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_for: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_count: Option<u32>,
    /// Target number of sections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_to_s3: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Receives a POST with the final job status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

impl VideoCreateRequest {
    pub fn from_messages(messages: Vec<VideoMessage>) -> Self {
        Self {
            messages: Some(messages),
            ..Default::default()
        }
    }

    pub fn from_script(script: Vec<String>) -> Self {
        Self {
            script: Some(script),
            ..Default::default()
        }
    }
}

/// POST /v1/video/create response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VideoCreateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// Pass to `Video::status` to poll the job.
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Source {
    pub url: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VideoApiResponseData {
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub sources: Vec<Source>,
}

/// Payload of a finished video job.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VideoApiResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub title: Option<String>,
    /// Set when the request asked for `upload_to_s3`.
    #[serde(default)]
    pub s3_url: Option<String>,
    #[serde(default)]
    pub data: Option<VideoApiResponseData>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// GET /v1/video/status/{id} response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VideoStatusResponse {
    #[serde(default)]
    pub success: bool,
    pub status: JobStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub total_sections: Option<u32>,
    #[serde(default)]
    pub completed_sections: Option<u32>,
    /// `None` while the job is pending.
    #[serde(default)]
    pub response: Option<VideoApiResponse>,
    /// Failure reason when `status` is `failed`.
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl JobStatusResponse for VideoStatusResponse {
    fn job_status(&self) -> JobStatus {
        self.status
    }
}
