use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A registered competitor.
///
/// `team_id` is the participant's single active team. Individual registration
/// repoints it at a freshly created one-person team.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Participant {
    pub participant_id: i32,
    pub last_name: String,
    pub first_name: String,
    pub patronymic: Option<String>,
    pub rating: i32,
    pub affiliation: String,
    pub team_id: Option<i32>,
    pub created_at: chrono::NaiveDateTime,
}

impl Participant {
    /// Name given to the synthetic team created for an individual entry
    pub fn solo_team_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }
}
