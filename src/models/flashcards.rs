use serde::{Deserialize, Serialize};

use super::Usage;

/// Input for `Flashcards::create`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FlashcardCreateRequest {
    /// What the set should cover. Required.
    pub set_description: String,
    /// Defaults to 10 when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_name: Option<String>,
}

impl FlashcardCreateRequest {
    pub fn new(set_description: impl Into<String>) -> Self {
        Self {
            set_description: set_description.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

/// POST /v1/interactives/flashcards/create response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FlashcardCreateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub set_name: Option<String>,
    #[serde(default)]
    pub flashcards: Vec<Flashcard>,
    #[serde(default)]
    pub usage: Option<Usage>,
    #[serde(default)]
    pub timestamp: Option<String>,
}
