//! Spreadsheet report — same rows as the CSV, highlighted by band.
//!
//! top → green fill, mid → yellow fill, low → no fill.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, Workbook};

use crate::errors::ScreenerError;
use crate::models::{Band, ResultRow};
use crate::report::table::CSV_HEADER;

const SHEET_NAME: &str = "Rankings";
const TOP_FILL: u32 = 0xC6EFCE;
const MID_FILL: u32 = 0xFFEB9C;

/// Column widths, in characters, matching `CSV_HEADER`.
const COLUMN_WIDTHS: [f64; 6] = [32.0, 40.0, 16.0, 18.0, 8.0, 8.0];

fn band_format(band: Band, base: Format) -> Format {
    match band {
        Band::Top => base.set_background_color(Color::RGB(TOP_FILL)),
        Band::Mid => base.set_background_color(Color::RGB(MID_FILL)),
        Band::Low => base,
    }
}

pub fn write_xlsx<'a>(
    path: &Path,
    rows: impl IntoIterator<Item = &'a ResultRow>,
) -> Result<(), ScreenerError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let header = Format::new().set_bold();
    for (col, title) in CSV_HEADER.iter().enumerate() {
        let col = col as u16;
        sheet.write_string_with_format(0, col, *title, &header)?;
        sheet.set_column_width(col, COLUMN_WIDTHS[col as usize])?;
    }
    sheet.set_freeze_panes(1, 0)?;

    for (i, row) in rows.into_iter().enumerate() {
        let r = i as u32 + 1;
        let text = band_format(row.band, Format::new());
        let score = band_format(row.band, Format::new().set_num_format("0.0000"));
        let percent = band_format(row.band, Format::new().set_num_format("0.00"));

        sheet.write_string_with_format(r, 0, &row.job_id, &text)?;
        sheet.write_string_with_format(r, 1, &row.resume_id, &text)?;
        sheet.write_number_with_format(r, 2, row.score, &score)?;
        sheet.write_number_with_format(r, 3, row.percentage, &percent)?;
        sheet.write_number_with_format(r, 4, row.rank as f64, &text)?;
        sheet.write_string_with_format(r, 5, row.band.as_str(), &text)?;
    }

    workbook.save(path)?;
    Ok(())
}
