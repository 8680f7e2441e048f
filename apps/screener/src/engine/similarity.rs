//! Similarity Scorer — cosine similarity between a job vector and a resume vector.

use std::sync::Arc;

use crate::engine::vectorizer::TermVector;

/// Cosine similarity in [0, 1].
///
/// Vectors from the same fit share a vocabulary and are compared slot by slot;
/// otherwise terms are matched by key. A zero vector on either side scores 0.
pub fn score(job: &TermVector, resume: &TermVector) -> f64 {
    if job.is_zero() || resume.is_zero() {
        return 0.0;
    }
    let denominator = job.norm() * resume.norm();

    let dot = if Arc::ptr_eq(job.vocabulary(), resume.vocabulary()) {
        job.weights()
            .iter()
            .zip(resume.weights())
            .map(|(a, b)| a * b)
            .sum::<f64>()
    } else {
        job.iter().map(|(term, w)| w * resume.weight(term)).sum::<f64>()
    };

    (dot / denominator).clamp(0.0, 1.0)
}
