use axum::{
    Json,
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use storage::dto::{
    common::PaginatedResponse,
    participant::ParticipantAnswersResponse,
    result::{DashboardSummary, ExportFilter, ResultFilter, ResultRow},
};
use storage::services::export;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AdminLoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminLoginResponse {
    pub ok: bool,
}

#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Password accepted", body = AdminLoginResponse),
        (status = 401, description = "Wrong password")
    ),
    tag = "admin"
)]
pub async fn admin_login(
    State(state): State<AppState>,
    Json(req): Json<AdminLoginRequest>,
) -> Result<Response, WebError> {
    if !state.admin.verify(&req.password) {
        tracing::warn!("Failed admin login attempt");
        return Err(WebError::Unauthorized);
    }

    Ok(Json(AdminLoginResponse { ok: true }).into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/summary",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Aggregate pass/fail counts and mean score", body = DashboardSummary),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin"
)]
pub async fn get_summary(State(state): State<AppState>) -> Result<Response, WebError> {
    let summary = services::summary(state.db.pool()).await?;

    Ok(Json(summary).into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/results",
    params(ResultFilter),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Filtered test results, newest first", body = PaginatedResponse<ResultRow>),
        (status = 400, description = "Invalid query parameters"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin"
)]
pub async fn list_results(
    State(state): State<AppState>,
    Query(filter): Query<ResultFilter>,
) -> Result<Response, WebError> {
    filter.validate().map_err(WebError::BadRequest)?;

    let (rows, total_items) = services::list_results(state.db.pool(), &filter).await?;

    let response = PaginatedResponse::new(
        rows,
        filter.pagination.page,
        filter.pagination.page_size,
        total_items,
    );

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/results/export",
    params(ExportFilter),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Filtered results as CSV attachment", content_type = "text/csv"),
        (status = 400, description = "Invalid query parameters"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin"
)]
pub async fn export_results(
    State(state): State<AppState>,
    Query(filter): Query<ExportFilter>,
) -> Result<Response, WebError> {
    filter.validate().map_err(WebError::BadRequest)?;

    let rows = services::export_rows(state.db.pool(), &filter).await?;
    let csv = export::render_csv(&rows);
    let filename = export::export_filename(Utc::now().naive_utc());

    tracing::info!(rows = rows.len(), filename = %filename, "results exported");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/participants/{id}/answers",
    params(
        ("id" = Uuid, Path, description = "Participant id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Participant with all recorded answers", body = ParticipantAnswersResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Participant not found")
    ),
    tag = "admin"
)]
pub async fn get_participant_answers(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let detail = services::participant_answers(state.db.pool(), id).await?;

    Ok(Json(detail).into_response())
}
