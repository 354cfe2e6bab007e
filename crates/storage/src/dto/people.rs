use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::standings::ParticipantResultEntry;
use crate::models::Participant;

/// Request payload for creating an organizer profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrganizerRequest {
    #[validate(length(min = 1, max = 255))]
    pub last_name: String,

    #[validate(length(min = 1, max = 255))]
    pub first_name: String,

    #[validate(length(max = 255))]
    pub patronymic: Option<String>,

    #[validate(length(min = 1, max = 255))]
    #[serde(default = "default_position")]
    pub position: String,

    #[validate(length(min = 1, max = 255))]
    #[serde(default = "default_qualification")]
    pub qualification: String,
}

/// Request payload for creating a participant profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateParticipantRequest {
    #[validate(length(min = 1, max = 255))]
    pub last_name: String,

    #[validate(length(min = 1, max = 255))]
    pub first_name: String,

    #[validate(length(max = 255))]
    pub patronymic: Option<String>,

    #[validate(range(min = 0, message = "Rating cannot be negative"))]
    #[serde(default)]
    pub rating: i32,

    #[validate(length(min = 1, max = 255))]
    #[serde(default = "default_affiliation")]
    pub affiliation: String,
}

/// Request payload for creating a team
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTeamRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 255))]
    pub mentor: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JoinTeamRequest {
    pub team_id: i32,
}

/// Organizer landing page figures
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrganizerDashboard {
    pub organizer: crate::models::Organizer,
    pub competition_count: i64,
    pub team_count: i64,
}

/// Participant profile with team and results
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipantDashboard {
    pub participant: Participant,
    pub team_name: String,
    pub results: Vec<ParticipantResultEntry>,
}

pub const NO_TEAM_LABEL: &str = "Not in a team";

fn default_position() -> String {
    "Organizer".to_string()
}

fn default_qualification() -> String {
    "Basic".to_string()
}

fn default_affiliation() -> String {
    "Not specified".to_string()
}
