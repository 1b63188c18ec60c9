use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::dto::result::TestResultResponse;
use crate::questions::{Category, QuestionView};

/// Opens a quiz session for a registered participant.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StartSessionRequest {
    pub participant_id: Uuid,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StartSessionResponse {
    pub session_id: Uuid,
    pub participant_id: Uuid,
    pub total_questions: usize,
    pub question: QuestionView,
}

/// One submitted answer: the index of the chosen option.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitAnswerRequest {
    pub selected_option: usize,
}

/// Outcome of a submission. `question` is the next one to answer while the
/// test is running; `result` is present exactly once, on the final answer.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubmitAnswerResponse {
    pub completed: bool,
    pub answered: usize,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<TestResultResponse>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionProgressResponse {
    pub session_id: Uuid,
    pub participant_id: Uuid,
    pub answered: usize,
    pub total_questions: usize,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionView>,
}

/// Shown to candidates before they start.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TestOverview {
    pub total_questions: usize,
    pub passing_score: f64,
    pub categories: Vec<Category>,
}
