//! Progress value object (0-100 scale with fractional precision).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion progress between 0 and 100 inclusive.
///
/// Fractional because partial credit inside a question batch produces
/// values like 56.7 (base phase weight plus answered/total of the batch).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress(f64);

impl Progress {
    /// No progress.
    pub const ZERO: Self = Self(0.0);

    /// Full progress.
    pub const COMPLETE: Self = Self(100.0);

    /// Creates a new Progress, clamping to the valid range.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 100.0))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        self.0 / 100.0
    }

    /// Returns true if progress has reached 100.
    pub fn is_complete(&self) -> bool {
        self.0 >= 100.0
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}
