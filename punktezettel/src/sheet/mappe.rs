//! One worksheet per Mappe: header block, per-student point grid, formula
//! cells for subtotals and totals, and the trailing summary rows.

use itertools::Itertools;
use rust_xlsxwriter::{Formula, Note, Workbook, XlsxError};

use crate::batch::Batch;
use crate::exam::ExamConfig;

use super::layout::{
    cell_ref, SheetLayout, COL_FIRST_NAME, COL_LAST_NAME, COL_MATRICULATION, ROW_FIRST_STUDENT,
    ROW_HEADERS, ROW_META, ROW_TASK_LABELS, ROW_TITLE,
};
use super::SheetFormats;

pub(crate) fn add_mappe_sheet(
    workbook: &mut Workbook,
    batch: &Batch<'_>,
    config: &ExamConfig,
    formats: &SheetFormats,
) -> Result<(), XlsxError> {
    let layout = SheetLayout::of(config);
    let worksheet = workbook
        .add_worksheet()
        .set_name(format!("Mappe {}", batch.number()))?;

    // Title and meta block: semester, date, Mappe number.
    worksheet.merge_range(
        ROW_TITLE,
        COL_MATRICULATION,
        ROW_TITLE,
        COL_FIRST_NAME,
        config.semester(),
        &formats.title,
    )?;
    worksheet.write_string_with_format(ROW_META, COL_MATRICULATION, "Datum:", &formats.meta)?;
    worksheet.write_datetime_with_format(ROW_META, COL_LAST_NAME, &config.date(), &formats.date)?;
    worksheet.write_string_with_format(ROW_META, COL_FIRST_NAME, "Mappe", &formats.meta)?;
    worksheet.write_number_with_format(ROW_META, 3, batch.number() as f64, &formats.meta)?;

    // Task group labels span each task's subtask columns plus its subtotal.
    for (task, cols) in config.tasks().iter().zip(layout.tasks()) {
        worksheet.merge_range(
            ROW_TASK_LABELS,
            cols.first_subtask,
            ROW_TASK_LABELS,
            cols.subtotal,
            task.label(),
            &formats.header,
        )?;
    }
    worksheet.merge_range(
        ROW_TASK_LABELS,
        layout.grand_total(),
        ROW_HEADERS,
        layout.grand_total(),
        "Gesamt",
        &formats.header,
    )?;

    // Column headers.
    worksheet.write_string_with_format(ROW_HEADERS, COL_MATRICULATION, "Matr.-Nr.", &formats.header)?;
    worksheet.write_string_with_format(ROW_HEADERS, COL_LAST_NAME, "Nachname", &formats.header)?;
    worksheet.write_string_with_format(ROW_HEADERS, COL_FIRST_NAME, "Vorname", &formats.header)?;
    for (task, cols) in config.tasks().iter().zip(layout.tasks()) {
        for (index, subtask) in task.subtasks().iter().enumerate() {
            worksheet.write_string_with_format(
                ROW_HEADERS,
                cols.subtask(index),
                format!("{} /{}", subtask.label(), subtask.max_points()),
                &formats.header,
            )?;
            // Descriptions hang off the header as a note so the grid itself
            // stays compact.
            if let Some(description) = subtask.description() {
                worksheet.insert_note(ROW_HEADERS, cols.subtask(index), &Note::new(description))?;
            }
        }
        worksheet.write_string_with_format(ROW_HEADERS, cols.subtotal, "Σ", &formats.header)?;
    }

    // One row per student, roster order within the batch. Subtask cells stay
    // blank for the grader; subtotals and the grand total are live formulas.
    for (offset, student) in batch.students().iter().enumerate() {
        let row = ROW_FIRST_STUDENT + offset as u32;

        worksheet.write_string_with_format(
            row,
            COL_MATRICULATION,
            student.matriculation().as_str(),
            &formats.info,
        )?;
        worksheet.write_string_with_format(row, COL_LAST_NAME, student.last_name(), &formats.info)?;
        worksheet.write_string_with_format(row, COL_FIRST_NAME, student.first_name(), &formats.info)?;

        for cols in layout.tasks() {
            for index in 0..cols.subtask_count {
                worksheet.write_blank(row, cols.first_subtask + index, &formats.entry)?;
            }
            let subtotal = format!(
                "=SUM({}:{})",
                cell_ref(row, cols.first_subtask),
                cell_ref(row, cols.last_subtask())
            );
            worksheet.write_formula_with_format(
                row,
                cols.subtotal,
                Formula::new(subtotal),
                &formats.entry,
            )?;
        }

        let grand_total = format!(
            "=SUM({})",
            layout
                .tasks()
                .iter()
                .map(|cols| cell_ref(row, cols.subtotal))
                .format(",")
        );
        worksheet.write_formula_with_format(
            row,
            layout.grand_total(),
            Formula::new(grand_total),
            &formats.entry,
        )?;
    }

    let last_student_row = ROW_FIRST_STUDENT + batch.len() as u32 - 1;

    // "Maximale Punkte": static configured maxima, deliberately not formulas,
    // so an over-scored column stands out against a fixed reference.
    let max_row = last_student_row + 1;
    worksheet.merge_range(
        max_row,
        COL_MATRICULATION,
        max_row,
        COL_FIRST_NAME,
        "Maximale Punkte",
        &formats.summary_label,
    )?;
    for (task, cols) in config.tasks().iter().zip(layout.tasks()) {
        for (index, subtask) in task.subtasks().iter().enumerate() {
            worksheet.write_number_with_format(
                max_row,
                cols.subtask(index),
                subtask.max_points().as_f64(),
                &formats.summary_value,
            )?;
        }
        worksheet.write_number_with_format(
            max_row,
            cols.subtotal,
            task.max_points(),
            &formats.summary_value,
        )?;
    }
    worksheet.write_number_with_format(
        max_row,
        layout.grand_total(),
        config.total_max_points(),
        &formats.summary_value,
    )?;

    // "Durchschnitt": averages over the student rows, blank until scores are
    // entered.
    let average_row = max_row + 1;
    worksheet.merge_range(
        average_row,
        COL_MATRICULATION,
        average_row,
        COL_FIRST_NAME,
        "Durchschnitt",
        &formats.summary_label,
    )?;
    for col in layout.points_columns() {
        let average = format!(
            "=IFERROR(AVERAGE({}:{}),\"\")",
            cell_ref(ROW_FIRST_STUDENT, col),
            cell_ref(last_student_row, col)
        );
        worksheet.write_formula_with_format(
            average_row,
            col,
            Formula::new(average),
            &formats.average,
        )?;
    }

    worksheet.set_column_width(COL_MATRICULATION, 18)?;
    worksheet.set_column_width(COL_LAST_NAME, 20)?;
    worksheet.set_column_width(COL_FIRST_NAME, 20)?;
    for col in layout.points_columns() {
        worksheet.set_column_width(col, 6)?;
    }
    worksheet.set_column_width(layout.grand_total(), 8)?;
    worksheet.set_row_height(ROW_TITLE, 26)?;
    worksheet.set_row_height(ROW_META, 22)?;

    Ok(())
}
