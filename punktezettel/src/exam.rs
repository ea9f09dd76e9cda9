//! Exam configuration: the task/subtask tree the form layer assembles before
//! a generation run. Immutable once constructed; the interactive add/remove
//! of Aufgaben happens entirely in the form layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::Points;

/// One gradable unit ("Teilaufgabe") with its own maximum point value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subtask {
    label: String,
    max_points: Points,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Subtask {
    pub fn new(label: String, max_points: Points, description: Option<String>) -> Self {
        Self {
            label,
            max_points,
            description,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn max_points(&self) -> Points {
        self.max_points
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// An exam task ("Aufgabe") with at least one subtask.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    label: String,
    subtasks: Vec<Subtask>,
}

impl Task {
    pub fn new(label: String, subtasks: Vec<Subtask>) -> Self {
        Self { label, subtasks }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn subtasks(&self) -> &[Subtask] {
        &self.subtasks
    }

    /// Maximum reachable points, derived from the subtasks.
    pub fn max_points(&self) -> f64 {
        self.subtasks
            .iter()
            .map(|subtask| subtask.max_points().as_f64())
            .sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamConfig {
    semester: String,
    date: NaiveDate,
    /// "Studis pro Mappe": how many students share one worksheet.
    batch_size: usize,
    tasks: Vec<Task>,
}

impl ExamConfig {
    pub fn new(semester: String, date: NaiveDate, batch_size: usize, tasks: Vec<Task>) -> Self {
        Self {
            semester,
            date,
            batch_size,
            tasks,
        }
    }

    pub fn semester(&self) -> &str {
        &self.semester
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Total reachable points across all tasks.
    pub fn total_max_points(&self) -> f64 {
        self.tasks.iter().map(Task::max_points).sum()
    }

    /// Fail-fast check run before any worksheet is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size < 1 {
            return Err(ConfigError::BatchSize);
        }
        if self.tasks.is_empty() {
            return Err(ConfigError::NoTasks);
        }
        for task in &self.tasks {
            if task.subtasks().is_empty() {
                return Err(ConfigError::NoSubtasks {
                    task: task.label().to_owned(),
                });
            }
            for subtask in task.subtasks() {
                if !subtask.max_points().is_positive() {
                    return Err(ConfigError::NonPositivePoints {
                        task: task.label().to_owned(),
                        subtask: subtask.label().to_owned(),
                        points: subtask.max_points().as_f64(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{ExamConfig, Subtask, Task};
    use crate::error::ConfigError;
    use crate::types::Points;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 17).unwrap()
    }

    fn subtask(label: &str, points: f64) -> Subtask {
        Subtask::new(label.to_owned(), Points::new(points), None)
    }

    #[test]
    fn task_max_points_is_the_sum_of_its_subtasks() {
        let task = Task::new(
            "Aufgabe 1".to_owned(),
            vec![subtask("1a", 5.0), subtask("1b", 3.0)],
        );
        assert_eq!(task.max_points(), 8.0);
    }

    #[test]
    fn total_max_points_spans_all_tasks() {
        let config = ExamConfig::new(
            "WiSe 25/26".to_owned(),
            date(),
            5,
            vec![
                Task::new("Aufgabe 1".to_owned(), vec![subtask("1a", 5.0)]),
                Task::new("Aufgabe 2".to_owned(), vec![subtask("2a", 4.0)]),
            ],
        );
        assert_eq!(config.total_max_points(), 9.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_batch_size_is_invalid() {
        let config = ExamConfig::new(
            "WiSe 25/26".to_owned(),
            date(),
            0,
            vec![Task::new("Aufgabe 1".to_owned(), vec![subtask("1a", 5.0)])],
        );
        assert_eq!(config.validate(), Err(ConfigError::BatchSize));
    }

    #[test]
    fn an_exam_without_tasks_is_invalid() {
        let config = ExamConfig::new("WiSe 25/26".to_owned(), date(), 5, Vec::new());
        assert_eq!(config.validate(), Err(ConfigError::NoTasks));
    }

    #[test]
    fn a_task_without_subtasks_is_invalid() {
        let config = ExamConfig::new(
            "WiSe 25/26".to_owned(),
            date(),
            5,
            vec![Task::new("Aufgabe 1".to_owned(), Vec::new())],
        );
        assert_eq!(
            config.validate(),
            Err(ConfigError::NoSubtasks {
                task: "Aufgabe 1".to_owned()
            })
        );
    }

    #[test]
    fn non_positive_points_are_invalid() {
        let config = ExamConfig::new(
            "WiSe 25/26".to_owned(),
            date(),
            5,
            vec![Task::new(
                "Aufgabe 1".to_owned(),
                vec![subtask("1a", 5.0), subtask("1b", 0.0)],
            )],
        );
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositivePoints {
                task: "Aufgabe 1".to_owned(),
                subtask: "1b".to_owned(),
                points: 0.0,
            })
        );
    }

    #[test]
    fn config_deserializes_from_form_json() {
        let config: ExamConfig = serde_json::from_str(
            r#"{
                "semester": "WiSe 25/26",
                "date": "2026-02-17",
                "batch_size": 5,
                "tasks": [
                    {
                        "label": "Aufgabe 1",
                        "subtasks": [
                            {"label": "1a", "max_points": 5},
                            {"label": "1b", "max_points": 3, "description": "Beweis"}
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.semester(), "WiSe 25/26");
        assert_eq!(config.batch_size(), 5);
        assert_eq!(config.tasks().len(), 1);
        assert_eq!(config.tasks()[0].subtasks()[1].description(), Some("Beweis"));
        assert!(config.validate().is_ok());
    }
}
