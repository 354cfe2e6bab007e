use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Competition {
    pub competition_id: i32,
    pub organizer_id: i32,
    pub name: String,
    pub kind: String,
    pub location: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub created_at: chrono::NaiveDateTime,
}

impl Competition {
    pub fn is_owned_by(&self, organizer_id: i32) -> bool {
        self.organizer_id == organizer_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership_matches_organizer_only() {
        let competition = Competition {
            competition_id: 4,
            organizer_id: 1,
            name: "Autumn Open".to_string(),
            kind: "Chess".to_string(),
            location: "Club".to_string(),
            start_date: chrono::NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            end_date: chrono::NaiveDate::from_ymd_opt(2025, 10, 2).unwrap(),
            created_at: chrono::NaiveDate::from_ymd_opt(2025, 9, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        };

        assert!(competition.is_owned_by(1));
        assert!(!competition.is_owned_by(2));
    }
}
