use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Answer;

pub struct AnswerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AnswerRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist one answered question. The participant row must exist; a
    /// dangling reference surfaces as `NotFound` rather than a 500.
    pub async fn record(
        &self,
        participant_id: Uuid,
        question_id: i32,
        answer: &str,
        is_correct: bool,
    ) -> Result<Answer> {
        let answer = sqlx::query_as::<_, Answer>(
            r#"
            INSERT INTO answers (participant_id, question_id, answer, is_correct)
            VALUES ($1, $2, $3, $4)
            RETURNING answer_id, participant_id, question_id, answer, is_correct, created_at
            "#,
        )
        .bind(participant_id)
        .bind(question_id)
        .bind(answer)
        .bind(is_correct)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_foreign_key_violation() {
                StorageError::NotFound
            } else {
                err
            }
        })?;

        Ok(answer)
    }

    /// All answers a participant has recorded, in submission order.
    pub async fn list_for_participant(&self, participant_id: Uuid) -> Result<Vec<Answer>> {
        let answers = sqlx::query_as::<_, Answer>(
            r#"
            SELECT answer_id, participant_id, question_id, answer, is_correct, created_at
            FROM answers
            WHERE participant_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(participant_id)
        .fetch_all(self.pool)
        .await?;

        Ok(answers)
    }
}
