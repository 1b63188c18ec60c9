use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::session::{
    SessionProgressResponse, StartSessionRequest, StartSessionResponse, SubmitAnswerRequest,
    SubmitAnswerResponse, TestOverview,
};
use uuid::Uuid;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/quiz",
    responses(
        (status = 200, description = "Test overview", body = TestOverview)
    ),
    tag = "quiz"
)]
pub async fn get_test_overview(State(state): State<AppState>) -> Result<Response, WebError> {
    Ok(Json(services::test_overview(&state.questions)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/quiz/sessions",
    request_body = StartSessionRequest,
    responses(
        (status = 201, description = "Session started, first question returned", body = StartSessionResponse),
        (status = 404, description = "Participant not found"),
        (status = 409, description = "Participant already has an open session")
    ),
    tag = "quiz"
)]
pub async fn start_session(
    State(state): State<AppState>,
    Json(req): Json<StartSessionRequest>,
) -> Result<Response, WebError> {
    let response = services::start_session(
        state.db.pool(),
        &state.sessions,
        &state.questions,
        req.participant_id,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(response)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/quiz/sessions/{id}",
    params(
        ("id" = Uuid, Path, description = "Session id")
    ),
    responses(
        (status = 200, description = "Session progress", body = SessionProgressResponse),
        (status = 404, description = "Session not found")
    ),
    tag = "quiz"
)]
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let progress = services::session_progress(&state.sessions, &state.questions, id)?;

    Ok(Json(progress).into_response())
}

#[utoipa::path(
    post,
    path = "/api/quiz/sessions/{id}/answers",
    params(
        ("id" = Uuid, Path, description = "Session id")
    ),
    request_body = SubmitAnswerRequest,
    responses(
        (status = 200, description = "Answer recorded; next question or final result", body = SubmitAnswerResponse),
        (status = 400, description = "Selected option out of range"),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Test already completed")
    ),
    tag = "quiz"
)]
pub async fn submit_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SubmitAnswerRequest>,
) -> Result<Response, WebError> {
    let response =
        services::submit_answer(state.db.pool(), &state.sessions, &state.questions, id, &req)
            .await?;

    Ok(Json(response).into_response())
}
