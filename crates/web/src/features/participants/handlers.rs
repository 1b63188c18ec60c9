use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::participant::{ParticipantResponse, RegisterParticipantRequest};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/participants",
    request_body = RegisterParticipantRequest,
    responses(
        (status = 201, description = "Participant registered successfully", body = ParticipantResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    ),
    tag = "participants"
)]
pub async fn register_participant(
    State(state): State<AppState>,
    Json(req): Json<RegisterParticipantRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let participant = services::register_participant(state.db.pool(), &req).await?;

    tracing::info!(participant_id = %participant.participant_id, position = %participant.position, "participant registered");

    Ok((
        StatusCode::CREATED,
        Json(ParticipantResponse::from(participant)),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/participants/{id}",
    params(
        ("id" = Uuid, Path, description = "Participant id")
    ),
    responses(
        (status = 200, description = "Participant found", body = ParticipantResponse),
        (status = 404, description = "Participant not found")
    ),
    tag = "participants"
)]
pub async fn get_participant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let participant = services::get_participant(state.db.pool(), id).await?;

    Ok(Json(ParticipantResponse::from(participant)).into_response())
}
