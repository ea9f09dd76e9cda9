//! Decodes uploaded roster files into the raw rows the validator consumes.
//! No schema checks happen here; [`crate::roster::Roster::validate`] owns
//! those.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use tracing::debug;

use crate::error::Error;

/// Rows of an uploaded CSV roster, header row included.
pub fn rows_from_csv(bytes: &[u8]) -> Result<Vec<Vec<String>>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_owned).collect());
    }

    debug!(rows = rows.len(), "decoded csv roster");
    Ok(rows)
}

/// Rows of the first worksheet of an uploaded XLSX roster.
pub fn rows_from_xlsx(bytes: &[u8]) -> Result<Vec<Vec<String>>, Error> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;

    let sheet_names = workbook.sheet_names();
    let Some(name) = sheet_names.first() else {
        return Ok(Vec::new());
    };
    let range = workbook.worksheet_range(name)?;

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    debug!(sheet = %name, rows = rows.len(), "decoded xlsx roster");
    Ok(rows)
}

// Excel stores matriculation numbers as floats; render whole numbers without
// the spurious `.0`.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
        Data::Empty => String::new(),
    }
}
