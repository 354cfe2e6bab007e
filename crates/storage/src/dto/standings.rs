use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::services::placement::TeamPlacement;

/// A team entered in a competition with its current standing.
///
/// `place` and `score` are taken from the team's result rows, which
/// finalization keeps identical across members.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TeamStanding {
    pub team_id: i32,
    pub team_name: String,
    pub place: Option<i32>,
    pub score: f64,
    pub member_count: i64,
}

/// One line of a participant's result history
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ParticipantResultEntry {
    pub competition_id: i32,
    pub competition_name: String,
    pub place: Option<i32>,
    pub score: f64,
}

/// Outcome of submitting final scores
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FinalizeResultsResponse {
    pub competition_id: i32,
    pub placements: Vec<TeamPlacement>,
    pub updated_rows: u64,
}
