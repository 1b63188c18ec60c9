use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Final outcome of one completed test. `completion_time` is whole minutes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TestResult {
    pub result_id: Uuid,
    pub participant_id: Uuid,
    pub total_questions: i32,
    pub correct_answers: i32,
    pub score: f64,
    pub completion_time: i64,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
}
