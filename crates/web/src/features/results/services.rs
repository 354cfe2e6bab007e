use sqlx::PgPool;
use storage::{
    error::Result,
    models::Competition,
    repository::{competition::CompetitionRepository, results::ResultRepository},
    services::{
        finalization::{FinalizeOutcome, finalize_results},
        placement::TeamScore,
    },
};

pub async fn get_competition(pool: &PgPool, competition_id: i32) -> Result<Competition> {
    CompetitionRepository::new(pool)
        .find_by_id(competition_id)
        .await
}

/// Rank the submitted scores and store them on the competition's results
pub async fn finalize(
    pool: &PgPool,
    competition_id: i32,
    scores: &[TeamScore],
) -> Result<FinalizeOutcome> {
    let repo = ResultRepository::new(pool);
    finalize_results(&repo, competition_id, scores).await
}
