//! Namespaced operation groups sharing the client's transport.

mod flashcards;
mod journals;
mod practice;
mod video;

pub use flashcards::{Flashcards, DEFAULT_FLASHCARD_COUNT};
pub use journals::Journals;
pub use practice::{PracticeProblems, DEFAULT_PRACTICE_PROBLEM_COUNT};
pub use video::{Video, DEFAULT_VIDEO_MODEL};

use crate::errors::{OpennoteError, Result};

/// Reject empty identifiers before anything touches the network.
pub(crate) fn require_non_empty(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(OpennoteError::InvalidArgument(format!(
            "{name} must not be empty"
        )));
    }
    Ok(())
}
