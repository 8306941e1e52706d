//! Mastery date prediction.
//!
//! Projects the date a skill will be mastered from its activity rate using
//! a fixed-rate linear model. The projection treats `activity_rate` both as
//! the current level (`100 - activity_rate` points remain) and as a weekly
//! velocity (`activity_rate / 7` points per day). The two readings are
//! dimensionally different; the formula is kept as-is until product decides
//! otherwise.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use skillstack_core::{check_percentage, CoreError};
use tracing::warn;

/// Default date rendering, ISO 8601.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Input to a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillProgressSnapshot {
    /// Percent of the skill's resources completed (0-100)
    pub completion_rate: f64,

    /// Percent of the skill's resources with recent activity (0-100)
    pub activity_rate: f64,

    /// Projection anchor, usually today
    pub reference_date: NaiveDate,
}

impl SkillProgressSnapshot {
    /// Create a snapshot.
    pub fn new(completion_rate: f64, activity_rate: f64, reference_date: NaiveDate) -> Self {
        Self {
            completion_rate,
            activity_rate,
            reference_date,
        }
    }

    /// Check both rates lie in `[0, 100]`.
    pub fn validate(&self) -> Result<(), CoreError> {
        check_percentage("completion_rate", self.completion_rate)?;
        check_percentage("activity_rate", self.activity_rate)?;
        Ok(())
    }
}

/// Outcome of a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "date", rename_all = "snake_case")]
pub enum MasteryPrediction {
    /// Every resource is complete
    Achieved,
    /// No activity yet, so there is no rate to project from
    NotStarted,
    /// Projected mastery date
    PredictedOn(NaiveDate),
    /// Input outside its domain; no meaningful date exists
    Indeterminate,
}

impl MasteryPrediction {
    /// Render for display, formatting dates with `date_format`.
    pub fn render(&self, date_format: &str) -> String {
        match self {
            Self::Achieved => "Achieved".to_string(),
            Self::NotStarted => "Not started".to_string(),
            Self::PredictedOn(date) => date.format(date_format).to_string(),
            Self::Indeterminate => "Unable to predict".to_string(),
        }
    }

    /// The projected date, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::PredictedOn(date) => Some(*date),
            _ => None,
        }
    }
}

impl std::fmt::Display for MasteryPrediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(DEFAULT_DATE_FORMAT))
    }
}

/// Linear mastery date predictor.
///
/// Stateless; reads no clock. The same snapshot always yields the same
/// prediction.
#[derive(Debug, Clone, Copy, Default)]
pub struct MasteryPredictor;

impl MasteryPredictor {
    /// Create a predictor.
    pub fn new() -> Self {
        Self
    }

    /// Predict when the skill in `snapshot` will be mastered.
    ///
    /// Full completion wins over everything, including an out-of-range
    /// activity rate.
    pub fn predict(&self, snapshot: &SkillProgressSnapshot) -> MasteryPrediction {
        if snapshot.completion_rate == 100.0 {
            return MasteryPrediction::Achieved;
        }

        if let Err(err) = snapshot.validate() {
            warn!(%err, "cannot predict mastery date");
            return MasteryPrediction::Indeterminate;
        }

        if snapshot.activity_rate == 0.0 {
            return MasteryPrediction::NotStarted;
        }

        let Some(days) = estimated_days(snapshot.activity_rate) else {
            warn!(
                activity_rate = snapshot.activity_rate,
                "activity rate too small to project"
            );
            return MasteryPrediction::Indeterminate;
        };

        match snapshot.reference_date.checked_add_days(Days::new(days)) {
            Some(date) => MasteryPrediction::PredictedOn(date),
            None => {
                warn!(days, "projected mastery date is out of calendar range");
                MasteryPrediction::Indeterminate
            }
        }
    }
}

/// Whole days until mastery for an activity rate in `(0, 100]`.
///
/// `ceil((100 - rate) / (rate / 7))`. Partial days round up. Returns `None`
/// when the rate is outside `(0, 100]` or so small the quotient is not a
/// representable day count.
pub fn estimated_days(activity_rate: f64) -> Option<u64> {
    if !(activity_rate > 0.0 && activity_rate <= 100.0) {
        return None;
    }

    let remaining = 100.0 - activity_rate;
    let weekly_rate = activity_rate / 7.0;
    let days = (remaining / weekly_rate).ceil();

    if days.is_finite() && days >= 0.0 && days <= u32::MAX as f64 {
        Some(days as u64)
    } else {
        None
    }
}

/// Predict with a throwaway [`MasteryPredictor`].
pub fn predict(snapshot: &SkillProgressSnapshot) -> MasteryPrediction {
    MasteryPredictor.predict(snapshot)
}
