use sqlx::PgPool;

use crate::dto::people::CreateParticipantRequest;
use crate::dto::standings::ParticipantResultEntry;
use crate::error::{Result, StorageError};
use crate::models::Participant;

const PARTICIPANT_COLUMNS: &str = "participant_id, last_name, first_name, patronymic, rating, \
                                   affiliation, team_id, created_at";

pub struct ParticipantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(&format!(
            "SELECT {PARTICIPANT_COLUMNS} FROM participants WHERE participant_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(participant)
    }

    pub async fn create(&self, req: &CreateParticipantRequest) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(&format!(
            r#"
            INSERT INTO participants (last_name, first_name, patronymic, rating, affiliation)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {PARTICIPANT_COLUMNS}
            "#
        ))
        .bind(&req.last_name)
        .bind(&req.first_name)
        .bind(&req.patronymic)
        .bind(req.rating)
        .bind(&req.affiliation)
        .fetch_one(self.pool)
        .await?;

        Ok(participant)
    }

    /// Make `team_id` the participant's active team, replacing any previous one
    pub async fn set_team(&self, participant_id: i32, team_id: i32) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(&format!(
            r#"
            UPDATE participants
            SET team_id = $2
            WHERE participant_id = $1
            RETURNING {PARTICIPANT_COLUMNS}
            "#
        ))
        .bind(participant_id)
        .bind(team_id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            let error = StorageError::from(e);
            if error.is_foreign_key_violation() {
                return StorageError::ConstraintViolation("Team does not exist".to_string());
            }
            error
        })?
        .ok_or(StorageError::NotFound)?;

        Ok(participant)
    }

    pub async fn list_results(&self, participant_id: i32) -> Result<Vec<ParticipantResultEntry>> {
        let results = sqlx::query_as::<_, ParticipantResultEntry>(
            r#"
            SELECT c.competition_id, c.name AS competition_name, r.place, r.score
            FROM results r
            INNER JOIN competitions c ON r.competition_id = c.competition_id
            WHERE r.participant_id = $1
            ORDER BY c.start_date DESC, c.competition_id DESC
            "#,
        )
        .bind(participant_id)
        .fetch_all(self.pool)
        .await?;

        Ok(results)
    }
}
