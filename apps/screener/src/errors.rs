use std::path::PathBuf;

use thiserror::Error;

/// Screening error type.
/// Per-job variants are isolated by the pipeline; the rest abort the run.
#[derive(Debug, Error)]
pub enum ScreenerError {
    #[error("No resumes available for job '{job_id}'")]
    EmptyCorpus { job_id: String },

    #[error("Job '{job_id}' has no text after normalization")]
    EmptyJobText { job_id: String },

    #[error("Nothing to screen: {0}")]
    EmptyInput(String),

    #[error("Cannot read input folder {}: {source}", path.display())]
    InputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScreenerError {
    /// Stable machine-readable code, written into skip diagnostics and the run summary.
    pub fn code(&self) -> &'static str {
        match self {
            ScreenerError::EmptyCorpus { .. } => "EMPTY_CORPUS",
            ScreenerError::EmptyJobText { .. } => "EMPTY_JOB_TEXT",
            ScreenerError::EmptyInput(_) => "EMPTY_INPUT",
            ScreenerError::InputDir { .. } => "INPUT_DIR",
            ScreenerError::Csv(_) => "CSV_ERROR",
            ScreenerError::Xlsx(_) => "XLSX_ERROR",
            ScreenerError::Json(_) => "JSON_ERROR",
            ScreenerError::Io(_) => "IO_ERROR",
        }
    }

    /// True for failures scoped to a single job. Everything else ends the run.
    pub fn is_job_scoped(&self) -> bool {
        matches!(
            self,
            ScreenerError::EmptyCorpus { .. } | ScreenerError::EmptyJobText { .. }
        )
    }
}
