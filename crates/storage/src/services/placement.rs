//! Score-to-place conversion for a single competition.
//!
//! Places follow standard competition ranking ("1224"): teams with exactly
//! equal scores share a place and the next lower score is placed after all
//! teams ranked above it.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use utoipa::ToSchema;

/// Form field prefix carrying a team's score, e.g. `points_12=87.5`
pub const SCORE_FIELD_PREFIX: &str = "points_";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamScore {
    pub team_id: i32,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct TeamPlacement {
    pub team_id: i32,
    pub score: f64,
    pub place: i32,
}

/// Parse a submitted score, coercing anything that is not a finite number to zero.
///
/// `-0` is folded into `0` so both sort as the same value.
pub fn parse_score(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value + 0.0,
        _ => 0.0,
    }
}

/// Collect `points_<team_id>` fields from a submitted form.
///
/// Keys without the prefix or with a non-integer team id are skipped. When two
/// keys name the same team (`points_7`, `points_07`) the lexicographically
/// last key wins.
pub fn scores_from_form(fields: &HashMap<String, String>) -> Vec<TeamScore> {
    let mut keys: Vec<&String> = fields.keys().collect();
    keys.sort();

    let mut by_team = BTreeMap::new();
    for key in keys {
        let Some(suffix) = key.strip_prefix(SCORE_FIELD_PREFIX) else {
            continue;
        };

        match suffix.parse::<i32>() {
            Ok(team_id) => {
                let raw = &fields[key];
                if !raw.trim().parse::<f64>().is_ok_and(f64::is_finite) {
                    tracing::warn!("Score {:?} for team {} is not numeric, using 0", raw, team_id);
                }
                by_team.insert(team_id, parse_score(raw));
            }
            Err(_) => tracing::debug!("Ignoring form field {}", key),
        }
    }

    by_team
        .into_iter()
        .map(|(team_id, score)| TeamScore { team_id, score })
        .collect()
}

/// Assign places to every submitted team.
///
/// Output is ordered best first; equal scores are ordered by team id.
pub fn compute_placements(scores: &[TeamScore]) -> Vec<TeamPlacement> {
    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.team_id.cmp(&b.team_id))
    });

    let mut placements = Vec::with_capacity(sorted.len());
    let mut current_place = 1;
    let mut skip_places = 0;
    let mut previous_score: Option<f64> = None;

    for (index, entry) in sorted.iter().enumerate() {
        if previous_score == Some(entry.score) {
            skip_places += 1;
        } else {
            current_place += skip_places;
            skip_places = 0;
            if index > 0 {
                current_place += 1;
            }
        }

        placements.push(TeamPlacement {
            team_id: entry.team_id,
            score: entry.score,
            place: current_place,
        });
        previous_score = Some(entry.score);
    }

    placements
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn scores(entries: &[(i32, f64)]) -> Vec<TeamScore> {
        entries
            .iter()
            .map(|&(team_id, score)| TeamScore { team_id, score })
            .collect()
    }

    fn places(placements: &[TeamPlacement]) -> Vec<(i32, i32)> {
        placements.iter().map(|p| (p.team_id, p.place)).collect()
    }

    #[test]
    fn test_ties_share_place_and_skip_following() {
        let input = scores(&[(1, 100.0), (2, 100.0), (3, 80.0), (4, 60.0), (5, 60.0)]);
        let result = compute_placements(&input);
        assert_eq!(places(&result), vec![(1, 1), (2, 1), (3, 3), (4, 4), (5, 4)]);
    }

    #[test]
    fn test_single_team_is_first() {
        let result = compute_placements(&scores(&[(9, 50.0)]));
        assert_eq!(places(&result), vec![(9, 1)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(compute_placements(&[]).is_empty());
    }

    #[test]
    fn test_unsorted_input_and_id_tie_break() {
        let input = scores(&[(30, 5.0), (10, 7.5), (20, 7.5), (5, 1.0)]);
        let result = compute_placements(&input);
        assert_eq!(places(&result), vec![(10, 1), (20, 1), (30, 3), (5, 4)]);
    }

    #[test]
    fn test_three_way_tie_in_the_middle() {
        let input = scores(&[(1, 10.0), (2, 8.0), (3, 8.0), (4, 8.0), (5, 2.0)]);
        let result = compute_placements(&input);
        assert_eq!(places(&result), vec![(1, 1), (2, 2), (3, 2), (4, 2), (5, 5)]);
    }

    #[test]
    fn test_near_equal_scores_do_not_tie() {
        let input = scores(&[(1, 0.1 + 0.2), (2, 0.3)]);
        let result = compute_placements(&input);
        assert_eq!(places(&result), vec![(1, 1), (2, 2)]);
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("42"), 42.0);
        assert_eq!(parse_score(" 12.5 "), 12.5);
        assert_eq!(parse_score("-3"), -3.0);
        assert_eq!(parse_score("abc"), 0.0);
        assert_eq!(parse_score(""), 0.0);
        assert_eq!(parse_score("NaN"), 0.0);
        assert_eq!(parse_score("inf"), 0.0);
    }

    #[test]
    fn test_scores_from_form() {
        let fields: HashMap<String, String> = [
            ("points_3", "80"),
            ("points_1", "abc"),
            ("points_x", "10"),
            ("csrf_token", "zzz"),
            ("points_2", "95.5"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let result = scores_from_form(&fields);
        assert_eq!(result, scores(&[(1, 0.0), (2, 95.5), (3, 80.0)]));
    }

    #[test]
    fn test_non_numeric_single_entry_ranks_first() {
        let fields = HashMap::from([("points_4".to_string(), "abc".to_string())]);
        let result = compute_placements(&scores_from_form(&fields));
        assert_eq!(result, vec![TeamPlacement { team_id: 4, score: 0.0, place: 1 }]);
    }

    #[test]
    fn test_negative_zero_ties_with_zero_in_id_order() {
        assert!(parse_score("-0").is_sign_positive());

        let fields = HashMap::from([
            ("points_1".to_string(), "-0".to_string()),
            ("points_2".to_string(), "0".to_string()),
        ]);
        let result = compute_placements(&scores_from_form(&fields));
        assert_eq!(places(&result), vec![(1, 1), (2, 1)]);
    }

    #[test]
    fn test_duplicate_team_keys_resolve_deterministically() {
        let fields = HashMap::from([
            ("points_7".to_string(), "1".to_string()),
            ("points_07".to_string(), "2".to_string()),
        ]);
        assert_eq!(scores_from_form(&fields), scores(&[(7, 1.0)]));
    }

    fn score_strategy() -> impl Strategy<Value = Vec<TeamScore>> {
        // Small score domain so ties show up often
        proptest::collection::btree_map(0..500i32, -5i32..5, 0..40).prop_map(|entries| {
            entries
                .into_iter()
                .map(|(team_id, score)| TeamScore {
                    team_id,
                    score: f64::from(score) * 2.5,
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_places_are_standard_competition_ranks(input in score_strategy()) {
            let result = compute_placements(&input);
            prop_assert_eq!(result.len(), input.len());

            for placement in &result {
                let better = input.iter().filter(|s| s.score > placement.score).count();
                prop_assert_eq!(placement.place as usize, better + 1);
            }
        }

        #[test]
        fn prop_places_non_decreasing(input in score_strategy()) {
            let result = compute_placements(&input);
            for pair in result.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
                prop_assert!(pair[0].place <= pair[1].place);
                if pair[0].score == pair[1].score {
                    prop_assert_eq!(pair[0].place, pair[1].place);
                } else {
                    prop_assert!(pair[0].place < pair[1].place);
                }
            }
        }

        #[test]
        fn prop_independent_of_input_order(input in score_strategy()) {
            let mut reversed = input.clone();
            reversed.reverse();
            prop_assert_eq!(compute_placements(&input), compute_placements(&reversed));
        }
    }
}
