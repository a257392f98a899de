//! # Opennote SDK for Rust
//!
//! Async client for the Opennote content-generation API: narrated videos,
//! flashcard sets, practice problem sets with grading, and read access to
//! journals.
//!
//! ## Quick start
//!
//! ```no_run
//! use opennote::{Client, PollOptions, VideoCreateRequest, VideoMessage};
//!
//! #[tokio::main]
//! async fn main() -> opennote::Result<()> {
//!     // Reads OPENNOTE_API_KEY from the environment.
//!     let client = Client::from_env()?;
//!
//!     let job = client
//!         .video()
//!         .create(VideoCreateRequest::from_messages(vec![VideoMessage::user(
//!             "Make a video about the Silk Road",
//!         )]))
//!         .await?;
//!
//!     if let Some(id) = job.video_id {
//!         let done = client.video().wait(&id, &PollOptions::default()).await?;
//!         if let Some(video) = done.response {
//!             println!("{:?}", video.s3_url);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Errors and retries
//!
//! Every method sends exactly one request (the `wait` helpers one per poll).
//! HTTP failures map to [`OpennoteError`] kinds by status code. The client
//! never retries on its own; [`ClientConfig::max_retries`] and
//! [`OpennoteError::is_retryable`] are there for callers that do.
//!
//! ## Logging
//!
//! Requests and responses are reported through [`tracing`] at `debug`,
//! failed statuses at `warn`. Install a subscriber to see them.

mod client;
mod config;
mod errors;
mod models;
mod polling;
mod resources;
mod transport;

pub use client::{Client, ClientBuilder};
pub use config::{ApiKeySource, ClientConfig, API_KEY_ENV_VAR};
pub use errors::{OpennoteError, Result};
pub use models::{
    Flashcard, FlashcardCreateRequest, FlashcardCreateResponse, GradeFrqResponse, HealthResponse,
    JobStatus, JobStatusResponse, JournalContentResponse, JournalSummary, JournalsListResponse,
    PracticeProblem, PracticeProblemSet, PracticeProblemSetCreateRequest,
    PracticeProblemSetCreateResponse, PracticeProblemSetStatusResponse, ProblemType, Source,
    Usage, VideoApiResponse, VideoApiResponseData, VideoCreateRequest, VideoCreateResponse,
    VideoMessage, VideoStatusResponse,
};
pub use polling::PollOptions;
pub use reqwest::header::HeaderMap;
pub use reqwest::Method;
pub use resources::{
    Flashcards, Journals, PracticeProblems, Video, DEFAULT_FLASHCARD_COUNT,
    DEFAULT_PRACTICE_PROBLEM_COUNT, DEFAULT_VIDEO_MODEL,
};
