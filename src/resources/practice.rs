use std::sync::Arc;

use super::require_non_empty;
use crate::errors::{OpennoteError, Result};
use crate::models::{
    GradeFrqResponse, GradeRequest, PracticeProblem, PracticeProblemSetCreateRequest,
    PracticeProblemSetCreateResponse, PracticeProblemSetStatusResponse,
};
use crate::polling::{poll_until_terminal, PollOptions};
use crate::transport::Transport;

pub const DEFAULT_PRACTICE_PROBLEM_COUNT: u32 = 5;

/// Practice problem sets and grading. Obtain via [`Client::practice`](crate::Client::practice).
#[derive(Clone)]
pub struct PracticeProblems {
    transport: Arc<Transport>,
}

impl PracticeProblems {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Start generating a practice set.
    pub async fn create(
        &self,
        mut request: PracticeProblemSetCreateRequest,
    ) -> Result<PracticeProblemSetCreateResponse> {
        require_non_empty("set_description", &request.set_description)?;
        request.count.get_or_insert(DEFAULT_PRACTICE_PROBLEM_COUNT);
        self.transport
            .post("/v1/interactives/practice/create", &request)
            .await
    }

    /// Fetch the current state of a practice set job.
    pub async fn status(&self, set_id: &str) -> Result<PracticeProblemSetStatusResponse> {
        require_non_empty("set_id", set_id)?;
        self.transport
            .get(&format!("/v1/interactives/practice/status/{set_id}"))
            .await
    }

    /// Poll [`status`](Self::status) at a fixed interval until the job leaves `pending`.
    pub async fn wait(
        &self,
        set_id: &str,
        opts: &PollOptions,
    ) -> Result<PracticeProblemSetStatusResponse> {
        require_non_empty("set_id", set_id)?;
        poll_until_terminal(opts, move || self.status(set_id)).await
    }

    /// Grade a student's answer.
    ///
    /// The problem is sent back as received from the set, plus `user_answer`
    /// (see [`PracticeProblem::with_user_answer`]).
    pub async fn grade(&self, problem: &PracticeProblem) -> Result<GradeFrqResponse> {
        if problem.user_answer.is_none() {
            return Err(OpennoteError::InvalidArgument(
                "problem.user_answer must be set before grading".into(),
            ));
        }
        self.transport
            .post("/v1/interactives/practice/grade", &GradeRequest { problem })
            .await
    }
}
