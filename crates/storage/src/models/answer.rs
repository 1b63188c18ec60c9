use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One recorded answer row. `answer` keeps the chosen option text so the
/// row stays readable even if the question bank changes later.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Answer {
    pub answer_id: Uuid,
    pub participant_id: Uuid,
    pub question_id: i32,
    pub answer: String,
    pub is_correct: bool,
    pub created_at: chrono::NaiveDateTime,
}
