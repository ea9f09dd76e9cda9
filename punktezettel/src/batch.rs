//! Splits the validated roster into Mappen of a fixed size.

use tracing::debug;

use crate::error::{ConfigError, Error};
use crate::roster::{Roster, StudentRecord};

/// A contiguous run of roster entries graded in one Mappe. Transient:
/// constructed and consumed within one generation run.
#[derive(Debug, Clone, Copy)]
pub struct Batch<'a> {
    index: usize,
    students: &'a [StudentRecord],
}

impl<'a> Batch<'a> {
    /// 1-based Mappe number, used for worksheet naming.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn students(&self) -> &'a [StudentRecord] {
        self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// Splits `roster` into consecutive chunks of `batch_size`; the last chunk
/// holds the remainder, and no empty trailing batch is ever produced. Batch
/// `i` always covers roster positions `i * batch_size ..`, so the same input
/// yields the same boundaries.
pub fn partition(roster: &Roster, batch_size: usize) -> Result<Vec<Batch<'_>>, Error> {
    if batch_size < 1 {
        return Err(ConfigError::BatchSize.into());
    }
    if roster.is_empty() {
        return Err(ConfigError::EmptyRoster.into());
    }

    let batches: Vec<_> = roster
        .students()
        .chunks(batch_size)
        .enumerate()
        .map(|(index, students)| Batch { index, students })
        .collect();

    debug!(
        students = roster.len(),
        batch_size,
        batches = batches.len(),
        "partitioned roster"
    );
    Ok(batches)
}

#[cfg(test)]
mod tests {
    use super::partition;
    use crate::error::{ConfigError, Error};
    use crate::roster::Roster;

    fn roster_of(size: usize) -> Roster {
        let mut rows = vec![vec![
            "Matr-Nr".to_owned(),
            "Nachname".to_owned(),
            "Vorname".to_owned(),
        ]];
        for i in 0..size {
            rows.push(vec![
                format!("{}", 100_000 + i),
                format!("Nachname{i}"),
                format!("Vorname{i}"),
            ]);
        }
        Roster::validate(&rows).unwrap()
    }

    #[test]
    fn batches_cover_the_roster_without_overlap_or_gaps() {
        for size in [1, 2, 3, 5, 7, 12] {
            for batch_size in 1..=size + 1 {
                let roster = roster_of(size);
                let batches = partition(&roster, batch_size).unwrap();

                let covered: Vec<_> = batches
                    .iter()
                    .flat_map(|batch| batch.students())
                    .map(|student| student.matriculation().as_str().to_owned())
                    .collect();
                let expected: Vec<_> = roster
                    .students()
                    .iter()
                    .map(|student| student.matriculation().as_str().to_owned())
                    .collect();
                assert_eq!(covered, expected, "size={size} batch_size={batch_size}");

                assert!(batches.iter().all(|batch| !batch.is_empty()));
                assert!(batches
                    .iter()
                    .rev()
                    .skip(1)
                    .all(|batch| batch.len() == batch_size));
            }
        }
    }

    #[test]
    fn partitioning_is_deterministic() {
        let roster = roster_of(7);
        let first: Vec<_> = partition(&roster, 3)
            .unwrap()
            .iter()
            .map(|batch| batch.len())
            .collect();
        let second: Vec<_> = partition(&roster, 3)
            .unwrap()
            .iter()
            .map(|batch| batch.len())
            .collect();
        assert_eq!(first, second);
        assert_eq!(first, [3, 3, 1]);
    }

    #[test]
    fn evenly_divisible_roster_has_no_short_batch() {
        let roster = roster_of(6);
        let sizes: Vec<_> = partition(&roster, 3)
            .unwrap()
            .iter()
            .map(|batch| batch.len())
            .collect();
        assert_eq!(sizes, [3, 3]);
    }

    #[test]
    fn batch_size_larger_than_roster_yields_one_batch() {
        let roster = roster_of(3);
        let batches = partition(&roster, 10).unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 3);
        assert_eq!(batches[0].number(), 1);
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let roster = roster_of(3);
        let err = partition(&roster, 0).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::BatchSize)));
    }

    #[test]
    fn empty_roster_is_rejected() {
        let roster = roster_of(0);
        let err = partition(&roster, 5).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::EmptyRoster)));
    }
}
