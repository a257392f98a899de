use std::sync::Arc;

use super::require_non_empty;
use crate::errors::Result;
use crate::models::{JournalContentResponse, JournalsListResponse};
use crate::transport::Transport;

/// Read access to the user's journals. Obtain via [`Client::journals`](crate::Client::journals).
#[derive(Clone)]
pub struct Journals {
    transport: Arc<Transport>,
}

impl Journals {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// List journals, one page at a time.
    ///
    /// Pass the previous page's `next_page_token` to continue.
    pub async fn list(&self, page_token: Option<i64>) -> Result<JournalsListResponse> {
        let path = match page_token {
            Some(token) => format!("/v1/journals/list?page_token={token}"),
            None => "/v1/journals/list".to_string(),
        };
        self.transport.get(&path).await
    }

    /// Fetch the full content of one journal.
    pub async fn content(&self, journal_id: &str) -> Result<JournalContentResponse> {
        require_non_empty("journal_id", journal_id)?;
        self.transport
            .get(&format!("/v1/journals/content/{journal_id}"))
            .await
    }
}
