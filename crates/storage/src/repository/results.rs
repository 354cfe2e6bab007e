use sqlx::PgPool;

use crate::dto::standings::TeamStanding;
use crate::error::Result;
use crate::services::finalization::StandingsStore;
use crate::services::placement::TeamPlacement;

pub struct ResultRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ResultRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Teams entered in a competition, best place first, unplaced teams last
    pub async fn standings(&self, competition_id: i32) -> Result<Vec<TeamStanding>> {
        let standings = sqlx::query_as::<_, TeamStanding>(
            r#"
            SELECT t.team_id,
                   t.name AS team_name,
                   MIN(r.place) AS place,
                   MAX(r.score) AS score,
                   COUNT(*) AS member_count
            FROM results r
            INNER JOIN teams t ON r.team_id = t.team_id
            WHERE r.competition_id = $1
            GROUP BY t.team_id, t.name
            ORDER BY place ASC NULLS LAST, t.team_id ASC
            "#,
        )
        .bind(competition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(standings)
    }

    /// Write every placement in one transaction.
    ///
    /// Returns the number of result rows touched. Any failure rolls back the
    /// whole batch.
    pub async fn apply_placements(
        &self,
        competition_id: i32,
        placements: &[TeamPlacement],
    ) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        let mut updated_rows = 0;

        for placement in placements {
            let result = sqlx::query(
                r#"
                UPDATE results
                SET score = $3, place = $4
                WHERE competition_id = $1 AND team_id = $2
                "#,
            )
            .bind(competition_id)
            .bind(placement.team_id)
            .bind(placement.score)
            .bind(placement.place)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                tracing::debug!(
                    "Team {} has no results in competition {}",
                    placement.team_id,
                    competition_id
                );
            }
            updated_rows += result.rows_affected();
        }

        tx.commit().await?;

        Ok(updated_rows)
    }
}

#[async_trait::async_trait]
impl StandingsStore for ResultRepository<'_> {
    async fn registered_teams(&self, competition_id: i32) -> Result<Vec<TeamStanding>> {
        self.standings(competition_id).await
    }

    async fn apply_placements(
        &self,
        competition_id: i32,
        placements: &[TeamPlacement],
    ) -> Result<u64> {
        ResultRepository::apply_placements(self, competition_id, placements).await
    }
}
