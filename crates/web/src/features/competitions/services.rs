use sqlx::PgPool;
use storage::{
    dto::{
        common::CompetitionFilter,
        competition::CreateCompetitionRequest,
        registration::{RegistrationMode, RegistrationResponse},
        standings::TeamStanding,
    },
    error::Result,
    models::Competition,
    repository::{
        competition::CompetitionRepository, participant::ParticipantRepository,
        results::ResultRepository,
    },
    services::registration::RegistrationService,
};

/// List competitions page by page
pub async fn list_competitions(
    pool: &PgPool,
    filter: &CompetitionFilter,
) -> Result<(Vec<Competition>, i64)> {
    let repo = CompetitionRepository::new(pool);
    repo.list(filter).await
}

/// Get competition by ID
pub async fn get_competition(pool: &PgPool, competition_id: i32) -> Result<Competition> {
    let repo = CompetitionRepository::new(pool);
    repo.find_by_id(competition_id).await
}

/// Create a competition owned by the calling organizer
pub async fn create_competition(
    pool: &PgPool,
    organizer_id: i32,
    request: &CreateCompetitionRequest,
) -> Result<Competition> {
    let repo = CompetitionRepository::new(pool);
    let competition = repo.create(organizer_id, request).await?;
    tracing::info!(
        "Organizer {} created competition {}",
        organizer_id,
        competition.competition_id
    );
    Ok(competition)
}

/// Teams entered in a competition with their current places
pub async fn get_standings(pool: &PgPool, competition_id: i32) -> Result<Vec<TeamStanding>> {
    CompetitionRepository::new(pool)
        .find_by_id(competition_id)
        .await?;
    ResultRepository::new(pool).standings(competition_id).await
}

/// Enter a participant, alone or with their team
pub async fn register_participant(
    pool: &PgPool,
    competition_id: i32,
    participant_id: i32,
    mode: RegistrationMode,
) -> Result<RegistrationResponse> {
    let competition = CompetitionRepository::new(pool)
        .find_by_id(competition_id)
        .await?;
    let participant = ParticipantRepository::new(pool)
        .find_by_id(participant_id)
        .await?;

    RegistrationService::new(pool)
        .register(&competition, &participant, mode)
        .await
}
