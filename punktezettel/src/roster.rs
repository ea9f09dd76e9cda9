//! Roster validation: turns the uploaded student list into typed records.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::error::Error;
use crate::types::Matriculation;

// Accepted spellings of the matriculation column; the template ships
// "Matr-Nr" but "Matr.-Nr." and "Matrikelnummer" circulate as well.
const MATRICULATION_COLUMNS: [&str; 3] = ["matr-nr", "matr.-nr.", "matrikelnummer"];
const LAST_NAME_COLUMN: &str = "nachname";
const FIRST_NAME_COLUMN: &str = "vorname";

/// One validated roster entry. Immutable once constructed.
#[derive(Debug, Clone, Serialize)]
pub struct StudentRecord {
    matriculation: Matriculation,
    last_name: String,
    first_name: String,
}

impl StudentRecord {
    pub fn matriculation(&self) -> &Matriculation {
        &self.matriculation
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }
}

/// The validated student list, in input file order. That order determines
/// Mappe membership and the row order inside each worksheet.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Roster {
    students: Vec<StudentRecord>,
}

impl Roster {
    /// Validates raw rows (first row = header) into an ordered roster.
    ///
    /// Checks, in order: the header columns match the expected names
    /// (case-insensitive after trimming), every data row carries exactly
    /// three non-empty fields, and matriculation numbers are unique. Row
    /// numbers in errors are 1-based file rows, header included.
    pub fn validate(rows: &[Vec<String>]) -> Result<Self, Error> {
        let (header, data) = rows.split_first().ok_or(Error::Schema { found: Vec::new() })?;
        check_header(header)?;

        let students = data
            .iter()
            .enumerate()
            .map(|(index, row)| student_from_row(row, file_row(index)))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some((first, second)) = first_duplicate(&students) {
            return Err(Error::DuplicateKey {
                value: students[second].matriculation.as_str().to_owned(),
                first_row: file_row(first),
                second_row: file_row(second),
            });
        }

        debug!(students = students.len(), "validated roster");
        Ok(Self { students })
    }

    pub fn students(&self) -> &[StudentRecord] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// 1-based file row of a data row, accounting for the header row.
fn file_row(data_index: usize) -> usize {
    data_index + 2
}

fn normalize(field: &str) -> String {
    field.trim().to_lowercase()
}

fn check_header(header: &[String]) -> Result<(), Error> {
    let mismatch = || Error::Schema {
        found: header.iter().map(|field| field.trim().to_owned()).collect(),
    };

    let [matriculation, last_name, first_name] = header else {
        return Err(mismatch());
    };
    if !MATRICULATION_COLUMNS.contains(&normalize(matriculation).as_str())
        || normalize(last_name) != LAST_NAME_COLUMN
        || normalize(first_name) != FIRST_NAME_COLUMN
    {
        return Err(mismatch());
    }
    Ok(())
}

fn student_from_row(row: &[String], file_row: usize) -> Result<StudentRecord, Error> {
    let mut fields: Vec<&str> = row.iter().map(|field| field.trim()).collect();
    // Spreadsheet exports pad rows with trailing empty cells; those do not
    // count as fields. A short row is an error, never padded.
    while fields.last() == Some(&"") {
        fields.pop();
    }

    match fields.as_slice() {
        [matriculation, last_name, first_name]
            if !matriculation.is_empty() && !last_name.is_empty() && !first_name.is_empty() =>
        {
            Ok(StudentRecord {
                matriculation: Matriculation::new((*matriculation).to_owned()),
                last_name: (*last_name).to_owned(),
                first_name: (*first_name).to_owned(),
            })
        }
        _ => Err(Error::RowFormat { row: file_row }),
    }
}

fn first_duplicate(students: &[StudentRecord]) -> Option<(usize, usize)> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (index, student) in students.iter().enumerate() {
        if let Some(&first) = seen.get(student.matriculation.as_str()) {
            return Some((first, index));
        }
        seen.insert(student.matriculation.as_str(), index);
    }
    None
}
