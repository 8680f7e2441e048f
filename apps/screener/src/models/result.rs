use serde::{Deserialize, Serialize};

/// One resume's position within a single job's ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub resume_id: String,
    pub score: f64,
    /// 1-based, dense.
    pub rank: usize,
}

/// Presentation band, derived from rank. Only the report sinks read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    /// rank 1–2
    Top,
    /// rank 3–5
    Mid,
    /// rank 6 and beyond
    Low,
}

impl Band {
    pub fn for_rank(rank: usize) -> Self {
        match rank {
            0..=2 => Band::Top,
            3..=5 => Band::Mid,
            _ => Band::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Band::Top => "top",
            Band::Mid => "mid",
            Band::Low => "low",
        }
    }
}

/// Flat reporting record: one per (job, resume) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "job_description")]
    pub job_id: String,
    #[serde(rename = "resume")]
    pub resume_id: String,
    /// Cosine similarity, 4 decimal places.
    #[serde(rename = "similarity_score")]
    pub score: f64,
    /// score × 100, 2 decimal places.
    #[serde(rename = "match_percentage")]
    pub percentage: f64,
    pub rank: usize,
    pub band: Band,
}

/// A job that produced no rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedJob {
    pub job_id: String,
    pub code: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(Band::for_rank(1), Band::Top);
        assert_eq!(Band::for_rank(2), Band::Top);
        assert_eq!(Band::for_rank(3), Band::Mid);
        assert_eq!(Band::for_rank(5), Band::Mid);
        assert_eq!(Band::for_rank(6), Band::Low);
        assert_eq!(Band::for_rank(40), Band::Low);
    }

    #[test]
    fn test_band_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Band::Mid).unwrap(), r#""mid""#);
        let band: Band = serde_json::from_str(r#""top""#).unwrap();
        assert_eq!(band, Band::Top);
    }

    #[test]
    fn test_row_serializes_with_report_column_names() {
        let row = ResultRow {
            job_id: "backend.txt".to_string(),
            resume_id: "a.pdf".to_string(),
            score: 0.4812,
            percentage: 48.12,
            rank: 1,
            band: Band::Top,
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["job_description"], "backend.txt");
        assert_eq!(value["resume"], "a.pdf");
        assert_eq!(value["match_percentage"], 48.12);
        assert_eq!(value["band"], "top");
    }
}
