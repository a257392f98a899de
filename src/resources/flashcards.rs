use std::sync::Arc;

use super::require_non_empty;
use crate::errors::Result;
use crate::models::{FlashcardCreateRequest, FlashcardCreateResponse};
use crate::transport::Transport;

pub const DEFAULT_FLASHCARD_COUNT: u32 = 10;

/// Flashcard set generation. Obtain via [`Client::flashcards`](crate::Client::flashcards).
#[derive(Clone)]
pub struct Flashcards {
    transport: Arc<Transport>,
}

impl Flashcards {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Generate a flashcard set. This call is synchronous on the service side.
    pub async fn create(
        &self,
        mut request: FlashcardCreateRequest,
    ) -> Result<FlashcardCreateResponse> {
        require_non_empty("set_description", &request.set_description)?;
        request.count.get_or_insert(DEFAULT_FLASHCARD_COUNT);
        self.transport
            .post("/v1/interactives/flashcards/create", &request)
            .await
    }
}
