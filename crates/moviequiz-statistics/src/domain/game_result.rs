//! Result of a single round.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Date format used when showing a record, e.g. `"07.03.26 21:15"`.
pub const DATE_DISPLAY_FORMAT: &str = "%d.%m.%y %H:%M";

/// Score of one completed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Correct answers.
    pub correct: u32,
    /// Questions asked.
    pub total: u32,
    /// When the round ended.
    pub date: DateTime<Utc>,
}

impl GameResult {
    /// Creates a result.
    #[must_use]
    pub fn new(correct: u32, total: u32, date: DateTime<Utc>) -> Self {
        Self {
            correct,
            total,
            date,
        }
    }

    /// Returns `correct / total`, or `0.0` for an empty result.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.total)
        }
    }

    /// Returns whether this result strictly beats `other` by accuracy ratio.
    ///
    /// Ratios are compared exactly, so 3/5 and 6/10 are equal and neither is
    /// better. An empty result (`total == 0`) is beaten by any non-empty one.
    #[must_use]
    pub fn is_better_than(&self, other: &Self) -> bool {
        if self.total == 0 {
            return false;
        }
        if other.total == 0 {
            return true;
        }
        u64::from(self.correct) * u64::from(other.total)
            > u64::from(other.correct) * u64::from(self.total)
    }

    /// Returns the date formatted for display.
    #[must_use]
    pub fn date_display(&self) -> String {
        self.date.format(DATE_DISPLAY_FORMAT).to_string()
    }
}
