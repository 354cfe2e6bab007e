use sqlx::PgPool;
use storage::{
    dto::people::CreateTeamRequest, error::Result, models::Team, repository::team::TeamRepository,
};

pub async fn list_teams(pool: &PgPool) -> Result<Vec<Team>> {
    let repo = TeamRepository::new(pool);
    repo.list().await
}

pub async fn create_team(pool: &PgPool, request: &CreateTeamRequest) -> Result<Team> {
    let repo = TeamRepository::new(pool);
    repo.create(request).await
}
