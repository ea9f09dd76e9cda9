//! The "Studenten" overview sheet: one row per student across all Mappen,
//! with the Mappe number, the position inside it, and the derived
//! KlausurCode used to label the physical exam copies.

use rust_xlsxwriter::{Workbook, XlsxError};

use crate::batch::Batch;

use super::SheetFormats;

const HEADERS: [&str; 6] = [
    "Mappe",
    "Stelle in Mappe",
    "KlausurCode",
    "Matrikelnummer",
    "Nachname",
    "Vorname",
];
const WIDTHS: [f64; 6] = [8.0, 16.0, 14.0, 18.0, 20.0, 20.0];

pub(crate) fn add_overview_sheet(
    workbook: &mut Workbook,
    batches: &[Batch<'_>],
    formats: &SheetFormats,
) -> Result<(), XlsxError> {
    let worksheet = workbook.add_worksheet().set_name("Studenten")?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &formats.header)?;
        worksheet.set_column_width(col as u16, WIDTHS[col])?;
    }

    let mut row = 1;
    for batch in batches {
        for (position, student) in batch.students().iter().enumerate() {
            worksheet.write_number_with_format(row, 0, batch.number() as f64, &formats.entry)?;
            worksheet.write_number_with_format(row, 1, position as f64, &formats.entry)?;
            worksheet.write_string_with_format(
                row,
                2,
                format!("{}_{}", batch.number(), position),
                &formats.entry,
            )?;
            worksheet.write_string_with_format(
                row,
                3,
                student.matriculation().as_str(),
                &formats.entry,
            )?;
            worksheet.write_string_with_format(row, 4, student.last_name(), &formats.entry)?;
            worksheet.write_string_with_format(row, 5, student.first_name(), &formats.entry)?;
            row += 1;
        }
    }

    Ok(())
}
