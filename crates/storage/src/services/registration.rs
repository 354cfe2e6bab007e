use sqlx::{PgPool, Postgres, Transaction};

use crate::dto::registration::{RegistrationMode, RegistrationResponse};
use crate::error::{Result, StorageError};
use crate::models::{Competition, Participant};

/// Enters participants into competitions
pub struct RegistrationService<'a> {
    pool: &'a PgPool,
}

impl<'a> RegistrationService<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Register `participant` in `competition`.
    ///
    /// Every inserted result starts unplaced with a zero score. The whole
    /// registration is one transaction.
    pub async fn register(
        &self,
        competition: &Competition,
        participant: &Participant,
        mode: RegistrationMode,
    ) -> Result<RegistrationResponse> {
        let mut tx = self.pool.begin().await?;

        let (team_id, participant_ids) = match mode {
            RegistrationMode::Individual => {
                let team_id = self.create_solo_team(participant, &mut tx).await?;
                (team_id, vec![participant.participant_id])
            }
            RegistrationMode::Team => {
                let team_id = participant.team_id.ok_or_else(|| {
                    StorageError::InvalidInput(
                        "Participant must join a team before registering as a team".to_string(),
                    )
                })?;
                let members = self.team_members(team_id, &mut tx).await?;
                (team_id, members)
            }
        };

        for participant_id in &participant_ids {
            self.insert_result(competition.competition_id, *participant_id, team_id, &mut tx)
                .await?;
        }

        tx.commit().await?;

        tracing::info!(
            "Registered team {} ({} participants) in competition {}",
            team_id,
            participant_ids.len(),
            competition.competition_id
        );

        Ok(RegistrationResponse {
            competition_id: competition.competition_id,
            team_id,
            participant_ids,
        })
    }

    async fn create_solo_team(
        &self,
        participant: &Participant,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i32> {
        let team_id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO teams (name) VALUES ($1) RETURNING team_id",
        )
        .bind(participant.solo_team_name())
        .fetch_one(&mut **tx)
        .await?;

        sqlx::query("UPDATE participants SET team_id = $2 WHERE participant_id = $1")
            .bind(participant.participant_id)
            .bind(team_id)
            .execute(&mut **tx)
            .await?;

        Ok(team_id)
    }

    async fn team_members(
        &self,
        team_id: i32,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<i32>> {
        let members = sqlx::query_scalar::<_, i32>(
            "SELECT participant_id FROM participants WHERE team_id = $1 ORDER BY participant_id",
        )
        .bind(team_id)
        .fetch_all(&mut **tx)
        .await?;

        Ok(members)
    }

    async fn insert_result(
        &self,
        competition_id: i32,
        participant_id: i32,
        team_id: i32,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO results (competition_id, participant_id, team_id, place, score)
            VALUES ($1, $2, $3, NULL, 0)
            "#,
        )
        .bind(competition_id)
        .bind(participant_id)
        .bind(team_id)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            StorageError::from(e).with_constraint_message(
                &format!(
                    "Participant {} is already registered in this competition",
                    participant_id
                ),
                "Competition, participant or team does not exist",
            )
        })?;

        Ok(())
    }
}
