//! Column and row positions for one Mappe worksheet. Pure arithmetic, kept
//! separate so the formula writers and the tests agree on where every cell
//! lives.

use std::ops::RangeInclusive;

use rust_xlsxwriter::utility::column_number_to_name;
use rust_xlsxwriter::{ColNum, RowNum};

use crate::exam::ExamConfig;

pub(crate) const COL_MATRICULATION: ColNum = 0;
pub(crate) const COL_LAST_NAME: ColNum = 1;
pub(crate) const COL_FIRST_NAME: ColNum = 2;
/// First column after the student info block.
const FIRST_TASK_COL: ColNum = 3;

pub(crate) const ROW_TITLE: RowNum = 0;
pub(crate) const ROW_META: RowNum = 1;
pub(crate) const ROW_TASK_LABELS: RowNum = 2;
pub(crate) const ROW_HEADERS: RowNum = 3;
pub(crate) const ROW_FIRST_STUDENT: RowNum = 4;

/// Where one task's column group sits: its subtask entry columns followed by
/// the task subtotal column.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TaskColumns {
    pub first_subtask: ColNum,
    pub subtask_count: ColNum,
    pub subtotal: ColNum,
}

impl TaskColumns {
    pub fn subtask(&self, index: usize) -> ColNum {
        self.first_subtask + index as ColNum
    }

    pub fn last_subtask(&self) -> ColNum {
        self.first_subtask + self.subtask_count - 1
    }
}

#[derive(Debug, Clone)]
pub(crate) struct SheetLayout {
    tasks: Vec<TaskColumns>,
    grand_total: ColNum,
}

impl SheetLayout {
    pub fn of(config: &ExamConfig) -> Self {
        let mut col = FIRST_TASK_COL;
        let mut tasks = Vec::with_capacity(config.tasks().len());
        for task in config.tasks() {
            let subtask_count = task.subtasks().len() as ColNum;
            tasks.push(TaskColumns {
                first_subtask: col,
                subtask_count,
                subtotal: col + subtask_count,
            });
            col += subtask_count + 1;
        }
        Self {
            tasks,
            grand_total: col,
        }
    }

    pub fn tasks(&self) -> &[TaskColumns] {
        &self.tasks
    }

    pub fn grand_total(&self) -> ColNum {
        self.grand_total
    }

    /// Every column that holds point values: subtask entries, task subtotals,
    /// and the grand total. They are contiguous.
    pub fn points_columns(&self) -> RangeInclusive<ColNum> {
        FIRST_TASK_COL..=self.grand_total
    }
}

/// `A1`-style reference for a cell.
pub(crate) fn cell_ref(row: RowNum, col: ColNum) -> String {
    format!("{}{}", column_number_to_name(col), row + 1)
}
