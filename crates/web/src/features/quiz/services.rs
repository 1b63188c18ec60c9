use chrono::Utc;
use sqlx::PgPool;
use storage::{
    dto::{
        result::TestResultResponse,
        session::{
            SessionProgressResponse, StartSessionResponse, SubmitAnswerRequest,
            SubmitAnswerResponse, TestOverview,
        },
    },
    questions::QuestionBank,
    repository::{
        answer::AnswerRepository, participant::ParticipantRepository, result::ResultRepository,
    },
    services::scoring,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

use super::session::{QuizSession, RecordedAnswer, SessionStore};

/// What candidates see before starting.
pub fn test_overview(bank: &QuestionBank) -> TestOverview {
    TestOverview {
        total_questions: bank.len(),
        passing_score: scoring::PASSING_SCORE,
        categories: bank.categories(),
    }
}

/// Open a session for a registered participant and hand out the first
/// question. One open session per participant at a time.
pub async fn start_session(
    pool: &PgPool,
    store: &SessionStore,
    bank: &QuestionBank,
    participant_id: Uuid,
) -> WebResult<StartSessionResponse> {
    ParticipantRepository::new(pool)
        .find_by_id(participant_id)
        .await?;

    let question = bank
        .view(0)
        .ok_or_else(|| WebError::InternalServerError("question bank is empty".to_string()))?;

    let session = QuizSession::new(participant_id, Utc::now().naive_utc());
    let response = StartSessionResponse {
        session_id: session.session_id,
        participant_id,
        total_questions: bank.len(),
        question,
    };

    if !store.try_start(session) {
        return Err(WebError::Conflict(
            "A test session for this participant is already in progress".to_string(),
        ));
    }

    tracing::info!(participant_id = %participant_id, session_id = %response.session_id, "test session started");

    Ok(response)
}

/// Where a session currently stands: answered count and the open question.
pub fn session_progress(
    store: &SessionStore,
    bank: &QuestionBank,
    session_id: Uuid,
) -> WebResult<SessionProgressResponse> {
    let session = store.get(session_id).ok_or(WebError::NotFound)?;
    let completed = session.is_complete(bank.len());

    Ok(SessionProgressResponse {
        session_id,
        participant_id: session.participant_id,
        answered: session.answered(),
        total_questions: bank.len(),
        completed,
        question: bank.view(session.current_question),
    })
}

/// Record one answer: check it against the current question, persist the
/// row, advance the pointer. The final answer also scores the test, writes
/// the single result row and drops the session.
pub async fn submit_answer(
    pool: &PgPool,
    store: &SessionStore,
    bank: &QuestionBank,
    session_id: Uuid,
    req: &SubmitAnswerRequest,
) -> WebResult<SubmitAnswerResponse> {
    let session = store.get(session_id).ok_or(WebError::NotFound)?;

    if session.is_complete(bank.len()) {
        return Err(WebError::Conflict(
            "This test has already been completed".to_string(),
        ));
    }

    let question = bank.get(session.current_question).ok_or_else(|| {
        WebError::InternalServerError("session pointer outside question bank".to_string())
    })?;

    let Some(answer_text) = question.option_text(req.selected_option) else {
        return Err(WebError::BadRequest(format!(
            "selected_option must be below {}",
            question.options.len()
        )));
    };

    let is_correct = question.is_correct(req.selected_option);

    AnswerRepository::new(pool)
        .record(session.participant_id, question.id, answer_text, is_correct)
        .await?;

    let updated = store
        .record_answer(
            session_id,
            RecordedAnswer {
                question_id: question.id,
                answer: answer_text.to_string(),
                is_correct,
            },
        )
        .ok_or(WebError::NotFound)?;

    if updated.is_complete(bank.len()) {
        let result = finalize_session(pool, store, bank, &updated).await?;

        return Ok(SubmitAnswerResponse {
            completed: true,
            answered: updated.answered(),
            total_questions: bank.len(),
            question: None,
            result: Some(result),
        });
    }

    Ok(SubmitAnswerResponse {
        completed: false,
        answered: updated.answered(),
        total_questions: bank.len(),
        question: bank.view(updated.current_question),
        result: None,
    })
}

async fn finalize_session(
    pool: &PgPool,
    store: &SessionStore,
    bank: &QuestionBank,
    session: &QuizSession,
) -> WebResult<TestResultResponse> {
    let summary = scoring::score_test(bank.len(), session.correct_count());
    let completion_time = scoring::elapsed_minutes(session.started_at, Utc::now().naive_utc());

    let result = ResultRepository::new(pool)
        .create(session.participant_id, &summary, completion_time)
        .await?;

    store.remove(session.session_id);

    tracing::info!(
        participant_id = %session.participant_id,
        score = summary.score,
        status = summary.status.as_str(),
        "test completed"
    );

    Ok(TestResultResponse::from(result))
}
