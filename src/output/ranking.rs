// Deterministic ranking of scored tokens.

use std::cmp::Ordering;

use crate::scoring::logodds::ScoredToken;

/// Order two scored tokens: higher score first, ties by token ascending.
///
/// Uses `f64::total_cmp`, so the order is total even for signed zeros.
pub fn ranking_order(a: &ScoredToken, b: &ScoredToken) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.token.cmp(&b.token))
}

/// Sort by descending score, breaking ties lexicographically by token.
///
/// The result depends only on the (token, score) pairs, not on the order
/// they arrive in.
pub fn rank(mut scored: Vec<ScoredToken>) -> Vec<ScoredToken> {
    scored.sort_by(ranking_order);
    scored
}
