use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::participant::RegisterParticipantRequest;
use crate::error::{Result, StorageError};
use crate::models::Participant;

pub struct ParticipantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a participant. Email is unique at the schema level; a second
    /// registration with the same address becomes a `ConstraintViolation`,
    /// never a second row.
    pub async fn create(&self, req: &RegisterParticipantRequest) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO participants (name, email, phone, position)
            VALUES ($1, $2, $3, $4)
            RETURNING participant_id, name, email, phone, position, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(&req.position)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                StorageError::ConstraintViolation(
                    "A participant with this email is already registered".to_string(),
                )
            } else {
                err
            }
        })?;

        Ok(participant)
    }

    /// Find participant by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            SELECT participant_id, name, email, phone, position, created_at
            FROM participants
            WHERE participant_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(participant)
    }
}
