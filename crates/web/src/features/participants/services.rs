use sqlx::PgPool;
use storage::{
    dto::participant::RegisterParticipantRequest, error::Result, models::Participant,
    repository::participant::ParticipantRepository,
};
use uuid::Uuid;

/// Insert a new participant; a duplicate email is a constraint violation.
pub async fn register_participant(
    pool: &PgPool,
    request: &RegisterParticipantRequest,
) -> Result<Participant> {
    let repo = ParticipantRepository::new(pool);
    repo.create(request).await
}

/// Get participant by id
pub async fn get_participant(pool: &PgPool, id: Uuid) -> Result<Participant> {
    let repo = ParticipantRepository::new(pool);
    repo.find_by_id(id).await
}
