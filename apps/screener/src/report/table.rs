//! Flat CSV table of every result row.

use std::io::Write;
use std::path::Path;

use crate::errors::ScreenerError;
use crate::models::ResultRow;

/// Header order written by [`write_csv`].
pub const CSV_HEADER: [&str; 6] = [
    "job_description",
    "resume",
    "similarity_score",
    "match_percentage",
    "rank",
    "band",
];

pub fn write_csv<'a>(
    path: &Path,
    rows: impl IntoIterator<Item = &'a ResultRow>,
) -> Result<(), ScreenerError> {
    let file = std::fs::File::create(path)?;
    write_rows(file, rows)
}

/// Writes the header even when there are no rows.
pub fn write_rows<'a, W: Write>(
    writer: W,
    rows: impl IntoIterator<Item = &'a ResultRow>,
) -> Result<(), ScreenerError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
