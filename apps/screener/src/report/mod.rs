// Report Sink: persists the full result set.
// CSV and JSON are always written; the spreadsheet can be switched off.

pub mod display;
pub mod spreadsheet;
pub mod summary;
pub mod table;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::engine::pipeline::ScreeningRun;
use crate::errors::ScreenerError;

pub use display::print_top_n;
pub use summary::RunSummary;

pub const CSV_FILE: &str = "ranked_results.csv";
pub const XLSX_FILE: &str = "ranked_results.xlsx";
pub const SUMMARY_FILE: &str = "run_summary.json";

/// Files produced by [`write_reports`].
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub csv: PathBuf,
    pub xlsx: Option<PathBuf>,
    pub summary: PathBuf,
}

/// Creates `output_dir` if needed and writes every report into it.
pub fn write_reports(
    output_dir: &Path,
    run: &ScreeningRun,
    summary: &RunSummary,
    with_xlsx: bool,
) -> Result<ReportPaths, ScreenerError> {
    std::fs::create_dir_all(output_dir)?;

    let csv = output_dir.join(CSV_FILE);
    table::write_csv(&csv, run.rows())?;
    info!("Wrote {} rows to {}", run.row_count(), csv.display());

    let xlsx = if with_xlsx {
        let path = output_dir.join(XLSX_FILE);
        spreadsheet::write_xlsx(&path, run.rows())?;
        info!("Wrote spreadsheet to {}", path.display());
        Some(path)
    } else {
        None
    };

    let summary_path = output_dir.join(SUMMARY_FILE);
    summary::write_summary(&summary_path, summary)?;
    info!(
        "Wrote run summary to {} ({} skips)",
        summary_path.display(),
        summary.skip_count()
    );

    Ok(ReportPaths {
        csv,
        xlsx,
        summary: summary_path,
    })
}
