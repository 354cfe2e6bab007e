use std::collections::HashSet;

use crate::dto::standings::TeamStanding;
use crate::error::Result;
use crate::services::placement::{TeamPlacement, TeamScore, compute_placements};

/// Persistence needed to finalize a competition's results
#[async_trait::async_trait]
pub trait StandingsStore: Send + Sync {
    /// Teams currently entered in the competition
    async fn registered_teams(&self, competition_id: i32) -> Result<Vec<TeamStanding>>;

    /// Store (score, place) on every result row of each team, all or nothing
    async fn apply_placements(
        &self,
        competition_id: i32,
        placements: &[TeamPlacement],
    ) -> Result<u64>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinalizeOutcome {
    pub placements: Vec<TeamPlacement>,
    pub updated_rows: u64,
}

/// Rank submitted scores and persist the resulting places.
///
/// Submitting the same scores again overwrites with identical values.
pub async fn finalize_results<S: StandingsStore>(
    store: &S,
    competition_id: i32,
    scores: &[TeamScore],
) -> Result<FinalizeOutcome> {
    if scores.is_empty() {
        tracing::info!("No scores submitted for competition {}", competition_id);
        return Ok(FinalizeOutcome {
            placements: Vec::new(),
            updated_rows: 0,
        });
    }

    let registered: HashSet<i32> = store
        .registered_teams(competition_id)
        .await?
        .into_iter()
        .map(|standing| standing.team_id)
        .collect();

    for score in scores.iter().filter(|s| !registered.contains(&s.team_id)) {
        tracing::warn!(
            "Score submitted for team {} which is not entered in competition {}",
            score.team_id,
            competition_id
        );
    }

    let placements = compute_placements(scores);
    let updated_rows = store.apply_placements(competition_id, &placements).await?;

    tracing::info!(
        "Finalized competition {}: {} teams placed, {} results updated",
        competition_id,
        placements.len(),
        updated_rows
    );

    Ok(FinalizeOutcome {
        placements,
        updated_rows,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use super::*;
    use crate::error::StorageError;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct StoredResult {
        team_id: i32,
        place: Option<i32>,
        score: f64,
    }

    /// Result rows keyed by participant, with an optional team whose update fails
    struct MemoryStore {
        rows: Mutex<BTreeMap<i32, StoredResult>>,
        failing_team: Option<i32>,
        writes: Mutex<usize>,
    }

    impl MemoryStore {
        fn new(members: &[(i32, i32)]) -> Self {
            let rows = members
                .iter()
                .map(|&(participant_id, team_id)| {
                    (
                        participant_id,
                        StoredResult {
                            team_id,
                            place: None,
                            score: 0.0,
                        },
                    )
                })
                .collect();

            Self {
                rows: Mutex::new(rows),
                failing_team: None,
                writes: Mutex::new(0),
            }
        }

        fn failing_on(mut self, team_id: i32) -> Self {
            self.failing_team = Some(team_id);
            self
        }

        fn snapshot(&self) -> BTreeMap<i32, StoredResult> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl StandingsStore for MemoryStore {
        async fn registered_teams(&self, _competition_id: i32) -> Result<Vec<TeamStanding>> {
            let rows = self.rows.lock().unwrap();
            let mut teams: Vec<i32> = rows.values().map(|r| r.team_id).collect();
            teams.sort_unstable();
            teams.dedup();

            Ok(teams
                .into_iter()
                .map(|team_id| TeamStanding {
                    team_id,
                    team_name: format!("team {team_id}"),
                    place: None,
                    score: 0.0,
                    member_count: rows.values().filter(|r| r.team_id == team_id).count() as i64,
                })
                .collect())
        }

        async fn apply_placements(
            &self,
            _competition_id: i32,
            placements: &[TeamPlacement],
        ) -> Result<u64> {
            *self.writes.lock().unwrap() += 1;

            // Stage on a copy, publish only when every team succeeded
            let mut staged = self.snapshot();
            let mut updated = 0;
            for placement in placements {
                if self.failing_team == Some(placement.team_id) {
                    return Err(StorageError::ConstraintViolation(
                        "simulated failure".to_string(),
                    ));
                }
                for row in staged.values_mut().filter(|r| r.team_id == placement.team_id) {
                    row.place = Some(placement.place);
                    row.score = placement.score;
                    updated += 1;
                }
            }

            *self.rows.lock().unwrap() = staged;
            Ok(updated)
        }
    }

    fn scores(entries: &[(i32, f64)]) -> Vec<TeamScore> {
        entries
            .iter()
            .map(|&(team_id, score)| TeamScore { team_id, score })
            .collect()
    }

    #[tokio::test]
    async fn test_places_applied_to_every_team_member() {
        // participants 1,2 in team 10; 3 in team 20; 4 in team 30
        let store = MemoryStore::new(&[(1, 10), (2, 10), (3, 20), (4, 30)]);

        let outcome = finalize_results(&store, 1, &scores(&[(10, 70.0), (20, 90.0), (30, 70.0)]))
            .await
            .unwrap();

        assert_eq!(outcome.updated_rows, 4);
        let rows = store.snapshot();
        assert_eq!(rows[&1].place, Some(2));
        assert_eq!(rows[&2].place, Some(2));
        assert_eq!(rows[&2].score, 70.0);
        assert_eq!(rows[&3].place, Some(1));
        assert_eq!(rows[&4].place, Some(2));
    }

    #[tokio::test]
    async fn test_absent_teams_are_untouched() {
        let store = MemoryStore::new(&[(1, 10), (2, 20)]);

        finalize_results(&store, 1, &scores(&[(10, 5.0)])).await.unwrap();

        let rows = store.snapshot();
        assert_eq!(rows[&1].place, Some(1));
        assert_eq!(
            rows[&2],
            StoredResult {
                team_id: 20,
                place: None,
                score: 0.0
            }
        );
    }

    #[tokio::test]
    async fn test_empty_submission_writes_nothing() {
        let store = MemoryStore::new(&[(1, 10)]);

        let outcome = finalize_results(&store, 1, &[]).await.unwrap();

        assert!(outcome.placements.is_empty());
        assert_eq!(outcome.updated_rows, 0);
        assert_eq!(*store.writes.lock().unwrap(), 0);
        assert_eq!(store.snapshot()[&1].place, None);
    }

    #[tokio::test]
    async fn test_resubmission_is_idempotent() {
        let store = MemoryStore::new(&[(1, 10), (2, 20), (3, 30)]);
        let input = scores(&[(10, 3.0), (20, 3.0), (30, 1.0)]);

        let first = finalize_results(&store, 1, &input).await.unwrap();
        let after_first = store.snapshot();
        let second = finalize_results(&store, 1, &input).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(after_first, store.snapshot());
    }

    #[tokio::test]
    async fn test_failed_batch_keeps_previous_values() {
        let store = MemoryStore::new(&[(1, 10), (2, 20), (3, 30)]);
        finalize_results(&store, 1, &scores(&[(10, 1.0), (20, 2.0), (30, 3.0)]))
            .await
            .unwrap();
        let before = store.snapshot();

        let store = MemoryStore {
            rows: Mutex::new(before.clone()),
            failing_team: None,
            writes: Mutex::new(0),
        }
        .failing_on(10);

        let result =
            finalize_results(&store, 1, &scores(&[(10, 50.0), (20, 40.0), (30, 30.0)])).await;

        assert!(matches!(result, Err(StorageError::ConstraintViolation(_))));
        assert_eq!(store.snapshot(), before);
    }

    #[tokio::test]
    async fn test_unregistered_team_still_ranked() {
        let store = MemoryStore::new(&[(1, 10)]);

        let outcome = finalize_results(&store, 1, &scores(&[(10, 1.0), (99, 2.0)]))
            .await
            .unwrap();

        assert_eq!(outcome.placements.len(), 2);
        assert_eq!(outcome.updated_rows, 1);
        assert_eq!(store.snapshot()[&1].place, Some(2));
    }
}
