use rust_xlsxwriter::{Format, Workbook};
use travessia_core::VesselRecord;

use crate::{HEADERS, ReportRow, error::Result};

pub const SHEET_NAME: &str = "Registros";

const COLUMN_WIDTHS: [f64; 5] = [25.0, 18.0, 12.0, 10.0, 22.0];

/// Renders the records as a single-sheet xlsx workbook.
#[tracing::instrument(skip_all, fields(records = records.len()))]
pub fn render(records: &[VesselRecord]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let bold = Format::new().set_bold();

    for (col, (header, width)) in HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        sheet.write_string_with_format(0, col, *header, &bold)?;
        sheet.set_column_width(col, width)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        let ReportRow {
            vessel_name,
            operation,
            date,
            time,
            passengers,
        } = ReportRow::from(record);

        sheet.write_string(row, 0, vessel_name)?;
        sheet.write_string(row, 1, operation)?;
        sheet.write_string(row, 2, date)?;
        sheet.write_string(row, 3, time)?;
        sheet.write_number(row, 4, passengers)?;
    }

    Ok(workbook.save_to_buffer()?)
}
