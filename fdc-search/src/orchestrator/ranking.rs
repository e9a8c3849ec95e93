//! Deterministic ranking of scored candidates.
//!
//! Candidates are scored by their position in the retrieved list, sorted by
//! score descending with ties going to the earlier upstream position, and
//! the head of the ranking is the selected food.

use serde::Serialize;

use crate::types::FoodRecord;

use super::scoring::score_candidate;

/// A candidate paired with its relevance score and upstream position.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    /// The candidate food record.
    pub food: FoodRecord,
    /// Relevance score (higher is better).
    pub score: f64,
    /// 0-based index in the retrieved candidate list.
    pub position: usize,
}

/// Score and sort all candidates for `query`, best first.
///
/// The sort is stable and breaks score ties by upstream position, so the
/// same input always yields the same order.
pub fn rank_candidates(query: &str, candidates: Vec<FoodRecord>) -> Vec<ScoredCandidate> {
    let mut ranked: Vec<ScoredCandidate> = candidates
        .into_iter()
        .enumerate()
        .map(|(position, food)| ScoredCandidate {
            score: score_candidate(&food, query, position),
            food,
            position,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.position.cmp(&b.position))
    });

    ranked
}

/// Select the single best candidate, or `None` for an empty list.
pub fn select_best(query: &str, candidates: Vec<FoodRecord>) -> Option<ScoredCandidate> {
    rank_candidates(query, candidates).into_iter().next()
}
