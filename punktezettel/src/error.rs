//! Typed failures of the engine. Each variant carries the detail the form
//! layer needs so the user can correct the source file: row numbers are
//! 1-based file rows (header = row 1), matching what a spreadsheet program
//! displays.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "roster header mismatch: expected the columns `Matr-Nr`, `Nachname`, `Vorname`, found {found:?}"
    )]
    Schema { found: Vec<String> },

    #[error("row {row} is malformed: expected exactly three non-empty fields")]
    RowFormat { row: usize },

    #[error("duplicate matriculation number `{value}` in rows {first_row} and {second_row}")]
    DuplicateKey {
        value: String,
        first_row: usize,
        second_row: usize,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not read roster CSV: {0}")]
    CsvRead(#[from] csv::Error),

    #[error("could not read roster workbook: {0}")]
    XlsxRead(#[from] calamine::XlsxError),

    #[error("could not assemble workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

/// Invalid exam configuration or partitioning input. Detected fail-fast,
/// before any worksheet is built.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Studis pro Mappe must be at least 1")]
    BatchSize,

    #[error("the roster contains no students")]
    EmptyRoster,

    #[error("the exam has no tasks")]
    NoTasks,

    #[error("task `{task}` has no subtasks")]
    NoSubtasks { task: String },

    #[error(
        "subtask `{subtask}` of task `{task}` must have positive maximum points, got {points}"
    )]
    NonPositivePoints {
        task: String,
        subtask: String,
        points: f64,
    },
}
