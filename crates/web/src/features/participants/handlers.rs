use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::people::{CreateParticipantRequest, JoinTeamRequest, ParticipantDashboard},
    models::Participant,
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::Principal;

use super::services;

#[utoipa::path(
    post,
    path = "/api/participants",
    request_body = CreateParticipantRequest,
    responses(
        (status = 201, description = "Participant created", body = Participant),
        (status = 400, description = "Validation error")
    ),
    tag = "participants"
)]
pub async fn create_participant(
    State(db): State<Database>,
    Json(req): Json<CreateParticipantRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let participant = services::create_participant(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(participant)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/participants/{id}",
    params(
        ("id" = i32, Path, description = "Participant ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Participant dashboard", body = ParticipantDashboard),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Dashboard belongs to another user"),
        (status = 404, description = "Participant not found")
    ),
    tag = "participants"
)]
pub async fn get_participant(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<Json<ParticipantDashboard>, WebError> {
    principal.require_participant(id)?;

    let dashboard = services::get_dashboard(db.pool(), id).await?;

    Ok(Json(dashboard))
}

#[utoipa::path(
    put,
    path = "/api/participants/{id}/team",
    params(
        ("id" = i32, Path, description = "Participant ID")
    ),
    request_body = JoinTeamRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Team joined", body = Participant),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Cannot change another participant's team"),
        (status = 404, description = "Participant not found"),
        (status = 409, description = "Team does not exist")
    ),
    tag = "participants"
)]
pub async fn join_team(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
    Json(req): Json<JoinTeamRequest>,
) -> Result<Json<Participant>, WebError> {
    principal.require_participant(id)?;

    let participant = services::join_team(db.pool(), id, req.team_id).await?;

    Ok(Json(participant))
}
