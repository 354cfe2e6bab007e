use std::collections::HashMap;

use axum::{
    Extension, Form, Json,
    extract::{Path, State},
};
use storage::{
    Database, dto::standings::FinalizeResultsResponse, services::placement::scores_from_form,
};

use crate::error::WebError;
use crate::middleware::auth::Principal;

use super::services;

/// Submit final scores and compute places.
///
/// Expects one `points_<team_id>` form field per team. Values that are not
/// numbers count as 0. Re-submitting overwrites earlier places.
#[utoipa::path(
    post,
    path = "/api/competitions/{id}/results",
    params(
        ("id" = i32, Path, description = "Competition ID")
    ),
    request_body(
        content = HashMap<String, String>,
        content_type = "application/x-www-form-urlencoded",
        description = "`points_<team_id>` fields holding each team's score"
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Places computed and stored", body = FinalizeResultsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller does not own the competition"),
        (status = 404, description = "Competition not found"),
        (status = 500, description = "Results could not be stored, nothing was changed")
    ),
    tag = "results"
)]
pub async fn submit_results(
    State(db): State<Database>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Json<FinalizeResultsResponse>, WebError> {
    let organizer_id = principal.organizer_id()?;

    let competition = services::get_competition(db.pool(), id).await?;
    if !competition.is_owned_by(organizer_id) {
        tracing::warn!(
            "Organizer {} tried to finalize competition {} owned by {}",
            organizer_id,
            id,
            competition.organizer_id
        );
        return Err(WebError::Forbidden(
            "Only the competition's organizer can submit results".to_string(),
        ));
    }

    let scores = scores_from_form(&fields);
    let outcome = services::finalize(db.pool(), id, &scores).await?;

    Ok(Json(FinalizeResultsResponse {
        competition_id: id,
        placements: outcome.placements,
        updated_rows: outcome.updated_rows,
    }))
}
