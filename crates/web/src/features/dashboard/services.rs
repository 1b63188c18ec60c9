use sqlx::PgPool;
use storage::{
    dto::{
        participant::{ParticipantAnswersResponse, ParticipantResponse},
        result::{DashboardSummary, ExportFilter, ResultFilter, ResultRow},
    },
    error::Result,
    repository::{
        answer::AnswerRepository, participant::ParticipantRepository, result::ResultRepository,
    },
};
use uuid::Uuid;

/// Pass/fail counts and mean score across all results.
pub async fn summary(pool: &PgPool) -> Result<DashboardSummary> {
    let repo = ResultRepository::new(pool);
    repo.summary().await
}

/// Filtered, paginated result rows joined to participants.
pub async fn list_results(pool: &PgPool, filter: &ResultFilter) -> Result<(Vec<ResultRow>, i64)> {
    let repo = ResultRepository::new(pool);
    repo.list_detailed(filter).await
}

/// The full filtered set for the CSV download.
pub async fn export_rows(pool: &PgPool, filter: &ExportFilter) -> Result<Vec<ResultRow>> {
    let repo = ResultRepository::new(pool);
    repo.list_for_export(filter).await
}

/// A participant together with every answer they recorded.
pub async fn participant_answers(pool: &PgPool, id: Uuid) -> Result<ParticipantAnswersResponse> {
    let participant = ParticipantRepository::new(pool).find_by_id(id).await?;
    let answers = AnswerRepository::new(pool).list_for_participant(id).await?;

    Ok(ParticipantAnswersResponse {
        participant: ParticipantResponse::from(participant),
        answers,
    })
}
