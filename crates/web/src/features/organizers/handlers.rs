use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::people::{CreateOrganizerRequest, OrganizerDashboard},
    models::Organizer,
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::Principal;

use super::services;

#[utoipa::path(
    post,
    path = "/api/organizers",
    request_body = CreateOrganizerRequest,
    responses(
        (status = 201, description = "Organizer created", body = Organizer),
        (status = 400, description = "Validation error")
    ),
    tag = "organizers"
)]
pub async fn create_organizer(
    State(db): State<Database>,
    Json(req): Json<CreateOrganizerRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let organizer = services::create_organizer(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(organizer)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/organizers/{id}/dashboard",
    params(
        ("id" = i32, Path, description = "Organizer ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Organizer dashboard", body = OrganizerDashboard),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Dashboard belongs to another user"),
        (status = 404, description = "Organizer not found")
    ),
    tag = "organizers"
)]
pub async fn get_dashboard(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<Json<OrganizerDashboard>, WebError> {
    principal.require_organizer(id)?;

    let dashboard = services::get_dashboard(db.pool(), id).await?;

    Ok(Json(dashboard))
}
