use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::{CompetitionFilter, PaginatedResponse},
        competition::{CompetitionResponse, CreateCompetitionRequest},
        registration::{RegistrationRequest, RegistrationResponse},
        standings::TeamStanding,
    },
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::Principal;

use super::services;

#[utoipa::path(
    get,
    path = "/api/competitions",
    params(CompetitionFilter),
    responses(
        (status = 200, description = "Competitions, newest first", body = PaginatedResponse<CompetitionResponse>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "competitions"
)]
pub async fn list_competitions(
    State(db): State<Database>,
    Query(filter): Query<CompetitionFilter>,
) -> Result<Response, WebError> {
    let pagination = filter.pagination();
    pagination.validate().map_err(WebError::BadRequest)?;

    let (competitions, total_items) = services::list_competitions(db.pool(), &filter).await?;

    let response = PaginatedResponse::new(
        competitions
            .into_iter()
            .map(CompetitionResponse::from)
            .collect(),
        pagination.page,
        pagination.page_size,
        total_items,
    );

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/competitions/{id}",
    params(
        ("id" = i32, Path, description = "Competition ID")
    ),
    responses(
        (status = 200, description = "Competition found", body = CompetitionResponse),
        (status = 404, description = "Competition not found")
    ),
    tag = "competitions"
)]
pub async fn get_competition(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let competition = services::get_competition(db.pool(), id).await?;

    Ok(Json(CompetitionResponse::from(competition)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/competitions/{id}/standings",
    params(
        ("id" = i32, Path, description = "Competition ID")
    ),
    responses(
        (status = 200, description = "Registered teams ordered by place", body = Vec<TeamStanding>),
        (status = 404, description = "Competition not found")
    ),
    tag = "competitions"
)]
pub async fn get_standings(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<TeamStanding>>, WebError> {
    let standings = services::get_standings(db.pool(), id).await?;

    Ok(Json(standings))
}

#[utoipa::path(
    post,
    path = "/api/competitions",
    request_body = CreateCompetitionRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Competition created successfully", body = CompetitionResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is not an organizer")
    ),
    tag = "competitions"
)]
pub async fn create_competition(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    Json(req): Json<CreateCompetitionRequest>,
) -> Result<Response, WebError> {
    let organizer_id = principal.organizer_id()?;

    req.validate()?;

    req.validate_dates()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let competition = services::create_competition(db.pool(), organizer_id, &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(CompetitionResponse::from(competition)),
    )
        .into_response())
}

#[utoipa::path(
    post,
    path = "/api/competitions/{id}/registrations",
    params(
        ("id" = i32, Path, description = "Competition ID")
    ),
    request_body = RegistrationRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Participant registered", body = RegistrationResponse),
        (status = 400, description = "Team registration without a team"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is not a participant"),
        (status = 404, description = "Competition not found"),
        (status = 409, description = "Already registered")
    ),
    tag = "competitions"
)]
pub async fn register(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
    Json(req): Json<RegistrationRequest>,
) -> Result<Response, WebError> {
    let Principal::Participant(participant_id) = principal else {
        return Err(WebError::Forbidden(
            "Only participants may register".to_string(),
        ));
    };

    let registration =
        services::register_participant(db.pool(), id, participant_id, req.mode).await?;

    Ok((StatusCode::CREATED, Json(registration)).into_response())
}
