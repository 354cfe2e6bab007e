use sqlx::PgPool;
use storage::{
    dto::people::{CreateOrganizerRequest, OrganizerDashboard},
    error::Result,
    models::Organizer,
    repository::{
        competition::CompetitionRepository, organizer::OrganizerRepository, team::TeamRepository,
    },
};

pub async fn create_organizer(pool: &PgPool, request: &CreateOrganizerRequest) -> Result<Organizer> {
    let repo = OrganizerRepository::new(pool);
    repo.create(request).await
}

/// Organizer profile with competition and team counts
pub async fn get_dashboard(pool: &PgPool, organizer_id: i32) -> Result<OrganizerDashboard> {
    let organizer = OrganizerRepository::new(pool).find_by_id(organizer_id).await?;
    let competition_count = CompetitionRepository::new(pool)
        .count_by_organizer(organizer_id)
        .await?;
    let team_count = TeamRepository::new(pool).count().await?;

    Ok(OrganizerDashboard {
        organizer,
        competition_count,
        team_count,
    })
}
