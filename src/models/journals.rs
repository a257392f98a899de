use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct JournalSummary {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// ISO 8601.
    #[serde(default)]
    pub created_at: Option<String>,
    /// ISO 8601.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// GET /v1/journals/list response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JournalsListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub journals: Vec<JournalSummary>,
    /// Pass to `Journals::list` for the next page. `None` means no more results.
    #[serde(default)]
    pub next_page_token: Option<i64>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl JournalsListResponse {
    /// `true` if `next_page_token` is `Some`.
    pub fn has_more(&self) -> bool {
        self.next_page_token.is_some()
    }
}

/// GET /v1/journals/content/{id} response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JournalContentResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub journal_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Markdown.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_page_has_no_token() {
        let page: JournalsListResponse = serde_json::from_str(
            r#"{"success":true,"journals":[{"id":"j1","title":"Notes"}],"next_page_token":null}"#,
        )
        .unwrap();
        assert_eq!(page.journals.len(), 1);
        assert!(!page.has_more());
    }

    #[test]
    fn failed_list_decodes_with_message_only() {
        let page: JournalsListResponse =
            serde_json::from_str(r#"{"success":false,"message":"no journals"}"#).unwrap();
        assert!(!page.success);
        assert!(page.journals.is_empty());
        assert_eq!(page.message.as_deref(), Some("no journals"));
    }
}
