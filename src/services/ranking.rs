use crate::domain::{RankedPlayer, ScoredPlayer};

/// Sort descending by value score and assign dense 1-based ranks. The sort is
/// stable, so exact score ties keep their input order — the input arrives in
/// candidate discovery order, and the earlier record takes the lower rank.
pub fn rank_players(mut scored: Vec<ScoredPlayer>) -> Vec<RankedPlayer> {
    scored.sort_by(|a, b| {
        b.value_score
            .partial_cmp(&a.value_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    scored
        .into_iter()
        .enumerate()
        .map(|(index, scored)| RankedPlayer {
            scored,
            rank: (index + 1) as u32,
        })
        .collect()
}
