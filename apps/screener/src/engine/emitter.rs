//! Result Row Emitter — flattens a ranked result into the reporting record.

use crate::models::{Band, RankedResult, ResultRow};

pub fn emit(job_id: &str, ranked: &RankedResult) -> ResultRow {
    ResultRow {
        job_id: job_id.to_string(),
        resume_id: ranked.resume_id.clone(),
        score: round_to(ranked.score, 4),
        percentage: round_to(ranked.score * 100.0, 2),
        rank: ranked.rank,
        band: Band::for_rank(ranked.rank),
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
