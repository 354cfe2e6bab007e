use sqlx::PgPool;

use crate::dto::people::CreateTeamRequest;
use crate::error::{Result, StorageError};
use crate::models::Team;

pub struct TeamRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TeamRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            r#"
            SELECT team_id, name, mentor, created_at
            FROM teams
            ORDER BY name, team_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(teams)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(
            "SELECT team_id, name, mentor, created_at FROM teams WHERE team_id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(team)
    }

    pub async fn create(&self, req: &CreateTeamRequest) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (name, mentor)
            VALUES ($1, $2)
            RETURNING team_id, name, mentor, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.mentor)
        .fetch_one(self.pool)
        .await?;

        Ok(team)
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM teams")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
