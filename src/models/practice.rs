use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{JobStatus, JobStatusResponse, Usage};

/// Input for `PracticeProblems::create`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PracticeProblemSetCreateRequest {
    /// What the set should cover. Required.
    pub set_description: String,
    /// Defaults to 5 when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_name: Option<String>,
    /// Let the service search the web for existing problems.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_for_problems: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

impl PracticeProblemSetCreateRequest {
    pub fn new(set_description: impl Into<String>) -> Self {
        Self {
            set_description: set_description.into(),
            ..Default::default()
        }
    }
}

/// POST /v1/interactives/practice/create response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PracticeProblemSetCreateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// Pass to `PracticeProblems::status` to poll the job.
    #[serde(default)]
    pub set_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemType {
    /// Multiple choice, one correct answer.
    Mcq,
    /// Free response, graded by the service.
    Frq,
    /// Multiple choice, any number of correct answers.
    Selectall,
    /// A problem type this SDK version does not know. Serializes as
    /// `"unknown"`, so the original string is not sent back on `grade`.
    #[serde(other)]
    Unknown,
}

/// A single generated question.
///
/// Fields this SDK does not model are kept in `extra` so the problem can be
/// sent back to `grade` unchanged.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PracticeProblem {
    pub problem_type: ProblemType,
    #[serde(default)]
    pub problem_statement: String,
    /// Choice label to text, for `mcq` and `selectall`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_choices: Option<BTreeMap<String, String>>,
    /// A label for `mcq`, a list of labels for `selectall`, text for `frq`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring_details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_graph: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_url: Option<String>,
    /// Set by the caller before grading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_answer: Option<Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl PracticeProblem {
    /// Attach the student's answer, consuming and returning the problem.
    pub fn with_user_answer(mut self, answer: impl Into<Value>) -> Self {
        self.user_answer = Some(answer.into());
        self
    }
}

/// A finished practice set.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PracticeProblemSet {
    #[serde(default)]
    pub set_id: Option<String>,
    #[serde(default)]
    pub set_name: Option<String>,
    #[serde(default)]
    pub problems: Vec<PracticeProblem>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// GET /v1/interactives/practice/status/{id} response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PracticeProblemSetStatusResponse {
    #[serde(default)]
    pub success: bool,
    pub status: JobStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub set_id: Option<String>,
    #[serde(default)]
    pub total_problems: Option<u32>,
    #[serde(default)]
    pub completed_problems: Option<u32>,
    /// `None` while the job is pending.
    #[serde(default)]
    pub response: Option<PracticeProblemSet>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl JobStatusResponse for PracticeProblemSetStatusResponse {
    fn job_status(&self) -> JobStatus {
        self.status
    }
}

/// Body of POST /v1/interactives/practice/grade.
#[derive(Serialize)]
pub(crate) struct GradeRequest<'a> {
    pub problem: &'a PracticeProblem,
}

/// POST /v1/interactives/practice/grade response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GradeFrqResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub max_score: f64,
    /// 100 * score / max_score, as reported by the service.
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
    #[serde(default)]
    pub timestamp: Option<String>,
}
