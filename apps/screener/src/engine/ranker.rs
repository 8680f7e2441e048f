//! Ranker — orders one job's resumes by similarity.
//!
//! Score descending, ties broken by resume id ascending. Ranks are dense and
//! 1-based: every position gets its own rank, equal scores included.

use std::cmp::Ordering;

use crate::models::RankedResult;

/// Default length of the top-N display view.
pub const DEFAULT_TOP_N: usize = 5;

/// Ranks `(resume_id, score)` pairs. Input order has no influence on the output.
pub fn rank<I, S>(scores: I) -> Vec<RankedResult>
where
    I: IntoIterator<Item = (S, f64)>,
    S: Into<String>,
{
    let mut scored: Vec<(String, f64)> = scores
        .into_iter()
        .map(|(id, score)| (id.into(), score))
        .collect();

    scored.sort_by(|(id_a, score_a), (id_b, score_b)| {
        match score_b.total_cmp(score_a) {
            Ordering::Equal => id_a.cmp(id_b),
            other => other,
        }
    });

    scored
        .into_iter()
        .enumerate()
        .map(|(position, (resume_id, score))| RankedResult {
            resume_id,
            score,
            rank: position + 1,
        })
        .collect()
}

/// Read-only display truncation. The full ranking is still what gets persisted.
pub fn top_n<T>(ranked: &[T], n: usize) -> &[T] {
    &ranked[..n.min(ranked.len())]
}
