use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::pipeline::ScreeningRun;
use crate::errors::ScreenerError;
use crate::models::{SkippedDocument, SkippedJob};

/// Machine-readable account of one run: counts plus every skip diagnostic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub jobs_loaded: usize,
    pub resumes_loaded: usize,
    pub jobs_ranked: usize,
    pub rows_written: usize,
    pub top_n: usize,
    pub skipped_jobs: Vec<SkippedJob>,
    /// Loader failures and empty-text exclusions, jobs and resumes alike.
    pub skipped_documents: Vec<SkippedDocument>,
}

impl RunSummary {
    /// `load_skips` are the loader's skips; the run's own skips are appended after them.
    pub fn new(
        run: &ScreeningRun,
        jobs_loaded: usize,
        resumes_loaded: usize,
        top_n: usize,
        load_skips: Vec<SkippedDocument>,
    ) -> Self {
        let mut skipped_documents = load_skips;
        skipped_documents.extend(run.skipped_documents.iter().cloned());

        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            jobs_loaded,
            resumes_loaded,
            jobs_ranked: run.jobs.len(),
            rows_written: run.row_count(),
            top_n,
            skipped_jobs: run.skipped_jobs.clone(),
            skipped_documents,
        }
    }

    pub fn skip_count(&self) -> usize {
        self.skipped_jobs.len() + self.skipped_documents.len()
    }
}

pub fn write_summary(path: &Path, summary: &RunSummary) -> Result<(), ScreenerError> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, summary)?;
    Ok(())
}
