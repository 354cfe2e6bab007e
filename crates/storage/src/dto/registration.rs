use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How a participant enters a competition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationMode {
    /// Enter alone under a freshly created one-person team
    #[default]
    Individual,
    /// Enter with every current member of the participant's team
    Team,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RegistrationRequest {
    #[serde(default)]
    pub mode: RegistrationMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResponse {
    pub competition_id: i32,
    pub team_id: i32,
    pub participant_ids: Vec<i32>,
}
