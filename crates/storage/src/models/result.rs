use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Standing of one participant, through their team, in one competition.
///
/// `place` stays `None` until the organizer submits scores.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CompetitionResult {
    pub result_id: i32,
    pub competition_id: i32,
    pub participant_id: i32,
    pub team_id: i32,
    pub place: Option<i32>,
    pub score: f64,
}
