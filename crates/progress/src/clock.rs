//! Source of "today" for projections.

use chrono::{Local, NaiveDate};

/// Supplies the reference date handed to the predictor.
///
/// Predictions never read the wall clock themselves; callers resolve the
/// date once per render and pass it in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// Local calendar date
    #[default]
    System,
    /// A pinned date, for tests and reproducible reports
    Fixed(NaiveDate),
}

impl Clock {
    /// Clock pinned to `date`.
    pub fn fixed(date: NaiveDate) -> Self {
        Self::Fixed(date)
    }

    /// Today's date according to this clock.
    pub fn today(&self) -> NaiveDate {
        match self {
            Self::System => Local::now().date_naive(),
            Self::Fixed(date) => *date,
        }
    }
}
