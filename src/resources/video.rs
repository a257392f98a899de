use std::sync::Arc;

use super::require_non_empty;
use crate::errors::Result;
use crate::models::{VideoCreateRequest, VideoCreateResponse, VideoStatusResponse};
use crate::polling::{poll_until_terminal, PollOptions};
use crate::transport::Transport;

/// Used when [`VideoCreateRequest::model`] is unset.
pub const DEFAULT_VIDEO_MODEL: &str = "picasso";

/// Video generation jobs. Obtain via [`Client::video`](crate::Client::video).
#[derive(Clone)]
pub struct Video {
    transport: Arc<Transport>,
}

impl Video {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Start a video job. Poll it with [`status`](Self::status) or [`wait`](Self::wait).
    pub async fn create(&self, mut request: VideoCreateRequest) -> Result<VideoCreateResponse> {
        request
            .model
            .get_or_insert_with(|| DEFAULT_VIDEO_MODEL.to_string());
        self.transport.post("/v1/video/create", &request).await
    }

    /// Fetch the current state of a video job.
    ///
    /// Fails with `InvalidArgument`, without a request, if `video_id` is empty.
    pub async fn status(&self, video_id: &str) -> Result<VideoStatusResponse> {
        require_non_empty("video_id", video_id)?;
        self.transport
            .get(&format!("/v1/video/status/{video_id}"))
            .await
    }

    /// Poll [`status`](Self::status) at a fixed interval until the job leaves `pending`.
    ///
    /// Returns the final status whatever it is; check
    /// [`JobStatus::is_success`](crate::JobStatus::is_success) before reading `response`.
    pub async fn wait(&self, video_id: &str, opts: &PollOptions) -> Result<VideoStatusResponse> {
        require_non_empty("video_id", video_id)?;
        poll_until_terminal(opts, move || self.status(video_id)).await
    }
}
