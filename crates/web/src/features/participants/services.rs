use sqlx::PgPool;
use storage::{
    dto::people::{CreateParticipantRequest, NO_TEAM_LABEL, ParticipantDashboard},
    error::Result,
    models::Participant,
    repository::{participant::ParticipantRepository, team::TeamRepository},
};

pub async fn create_participant(
    pool: &PgPool,
    request: &CreateParticipantRequest,
) -> Result<Participant> {
    let repo = ParticipantRepository::new(pool);
    repo.create(request).await
}

/// Participant profile, current team name and result history
pub async fn get_dashboard(pool: &PgPool, participant_id: i32) -> Result<ParticipantDashboard> {
    let repo = ParticipantRepository::new(pool);
    let participant = repo.find_by_id(participant_id).await?;

    let team_name = match participant.team_id {
        Some(team_id) => TeamRepository::new(pool).find_by_id(team_id).await?.name,
        None => NO_TEAM_LABEL.to_string(),
    };

    let results = repo.list_results(participant_id).await?;

    Ok(ParticipantDashboard {
        participant,
        team_name,
        results,
    })
}

pub async fn join_team(pool: &PgPool, participant_id: i32, team_id: i32) -> Result<Participant> {
    let repo = ParticipantRepository::new(pool);
    let participant = repo.set_team(participant_id, team_id).await?;
    tracing::info!("Participant {} joined team {}", participant_id, team_id);
    Ok(participant)
}
