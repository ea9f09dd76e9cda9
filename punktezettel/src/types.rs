//! Small domain newtypes shared across the engine.

use std::fmt;
use std::num::FpCategory;

use serde::{Deserialize, Serialize};

/// A student's matriculation number ("Matr.-Nr."), the unique identifier in
/// the roster. Kept as a string: leading zeros are significant.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matriculation {
    number: String,
}

impl Matriculation {
    pub fn new(number: String) -> Self {
        Self { number }
    }

    pub fn as_str(&self) -> &str {
        &self.number
    }
}

impl fmt::Display for Matriculation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.number.fmt(f)
    }
}

/// A point value. Whole values display without a trailing `.0` so column
/// headers read "1a /5" rather than "1a /5.0".
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Points {
    points: f64,
}

impl Points {
    pub fn new(points: f64) -> Self {
        Self { points }
    }

    pub fn as_f64(self) -> f64 {
        self.points
    }

    /// Maximum points must be a normal positive float; zero, negative, NaN,
    /// and infinite values are rejected by the config validation.
    pub fn is_positive(self) -> bool {
        matches!(self.points.classify(), FpCategory::Normal) && self.points > 0.0
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.points.fract() == 0.0 && self.points.abs() < 1e15 {
            write!(f, "{}", self.points as i64)
        } else {
            write!(f, "{}", self.points)
        }
    }
}
