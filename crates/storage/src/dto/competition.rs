use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating a new competition.
///
/// The owning organizer comes from the authenticated caller, not the body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCompetitionRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Type must be between 1 and 255 characters"
    ))]
    pub kind: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Location must be between 1 and 255 characters"
    ))]
    pub location: String,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,
}

impl CreateCompetitionRequest {
    /// Additional validation that requires multiple fields
    pub fn validate_dates(&self) -> Result<(), &'static str> {
        if self.end_date < self.start_date {
            return Err("End date must be on or after start date");
        }

        Ok(())
    }
}

/// Response containing competition details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompetitionResponse {
    pub competition_id: i32,
    pub organizer_id: i32,
    pub name: String,
    pub kind: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: chrono::NaiveDateTime,
}

impl From<crate::models::Competition> for CompetitionResponse {
    fn from(comp: crate::models::Competition) -> Self {
        Self {
            competition_id: comp.competition_id,
            organizer_id: comp.organizer_id,
            name: comp.name,
            kind: comp.kind,
            location: comp.location,
            start_date: comp.start_date,
            end_date: comp.end_date,
            created_at: comp.created_at,
        }
    }
}
