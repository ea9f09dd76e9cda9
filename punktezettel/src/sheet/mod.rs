//! Builds the Punktezettel workbook: a roster overview sheet plus one
//! worksheet per Mappe, with live subtotal and grand-total formulas so the
//! exported file recalculates when a grader corrects a score.

mod layout;
mod mappe;
mod overview;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use tracing::debug;

use crate::batch::Batch;
use crate::error::Error;
use crate::exam::ExamConfig;

const FILL_GRAY: Color = Color::RGB(0x00D9_D9D9);

/// Cell formats shared by all worksheets, built once per workbook.
pub(crate) struct SheetFormats {
    title: Format,
    meta: Format,
    date: Format,
    header: Format,
    info: Format,
    entry: Format,
    summary_label: Format,
    summary_value: Format,
    average: Format,
}

impl SheetFormats {
    fn new() -> Self {
        Self {
            title: Format::new()
                .set_bold()
                .set_font_size(18)
                .set_align(FormatAlign::Center),
            meta: Format::new()
                .set_bold()
                .set_font_size(12)
                .set_align(FormatAlign::Center),
            date: Format::new()
                .set_bold()
                .set_font_size(12)
                .set_align(FormatAlign::Center)
                .set_num_format("dd.mm.yyyy"),
            header: Format::new()
                .set_bold()
                .set_background_color(FILL_GRAY)
                .set_align(FormatAlign::Center)
                .set_border(FormatBorder::Thin),
            info: Format::new().set_border(FormatBorder::Thin),
            entry: Format::new()
                .set_align(FormatAlign::Center)
                .set_border(FormatBorder::Thin),
            summary_label: Format::new()
                .set_bold()
                .set_background_color(FILL_GRAY)
                .set_align(FormatAlign::Center)
                .set_border(FormatBorder::Thin),
            summary_value: Format::new()
                .set_background_color(FILL_GRAY)
                .set_align(FormatAlign::Center)
                .set_border(FormatBorder::Thin),
            average: Format::new()
                .set_background_color(FILL_GRAY)
                .set_align(FormatAlign::Center)
                .set_border(FormatBorder::Thin)
                .set_num_format("0.00"),
        }
    }
}

/// Builds the full workbook, one "Mappe {n}" worksheet per batch in batch
/// order, preceded by the "Studenten" overview sheet. Fails before any
/// worksheet exists if the configuration is invalid; never returns a partial
/// document. The caller exclusively owns the result.
pub fn build(batches: &[Batch<'_>], config: &ExamConfig) -> Result<Workbook, Error> {
    config.validate()?;

    let formats = SheetFormats::new();
    let mut workbook = Workbook::new();

    overview::add_overview_sheet(&mut workbook, batches, &formats)?;
    for batch in batches {
        mappe::add_mappe_sheet(&mut workbook, batch, config, &formats)?;
    }

    debug!(
        batches = batches.len(),
        tasks = config.tasks().len(),
        total_points = config.total_max_points(),
        "built workbook"
    );
    Ok(workbook)
}

/// [`build`] followed by serialization, for the download handler.
pub fn build_to_buffer(batches: &[Batch<'_>], config: &ExamConfig) -> Result<Vec<u8>, Error> {
    let mut workbook = build(batches, config)?;
    Ok(workbook.save_to_buffer()?)
}
