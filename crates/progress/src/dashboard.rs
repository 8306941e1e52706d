//! Dashboard skills table rows.

use chrono::NaiveDate;
use skillstack_core::{SkillBreakdown, SkillId};
use tracing::warn;

use crate::mastery::{MasteryPrediction, MasteryPredictor, SkillProgressSnapshot};
use crate::status::SkillStatus;

/// One row of the "Skills Breakdown & Predictions" table.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardRow {
    /// Skill id
    pub id: SkillId,
    /// Skill name
    pub name: String,
    /// Attached resources
    pub resource_count: u64,
    /// Active resources
    pub active_count: u64,
    /// Completed resources
    pub completed_count: u64,
    /// Activity rate rounded to a whole percent
    pub activity_percent: u8,
    /// Mastery prediction
    pub prediction: MasteryPrediction,
    /// Status badge
    pub status: SkillStatus,
}

impl DashboardRow {
    /// Build a row, predicting against `reference_date`.
    ///
    /// A breakdown that fails validation still yields a row; its prediction
    /// is `Indeterminate` instead of a date computed from bad rates, unless
    /// the skill is fully completed.
    pub fn from_breakdown(breakdown: &SkillBreakdown, reference_date: NaiveDate) -> Self {
        let prediction = match breakdown.validate() {
            Ok(()) => MasteryPredictor.predict(&snapshot_of(breakdown, reference_date)),
            Err(_) if breakdown.completion_rate == 100.0 => MasteryPrediction::Achieved,
            Err(err) => {
                warn!(skill = %breakdown.id, %err, "skills breakdown row out of domain");
                MasteryPrediction::Indeterminate
            }
        };

        Self {
            id: breakdown.id,
            name: breakdown.name.clone(),
            resource_count: breakdown.resource_count,
            active_count: breakdown.active_count,
            completed_count: breakdown.completed_count,
            activity_percent: round_percent(breakdown.activity_rate),
            prediction,
            status: SkillStatus::from_rates(breakdown.completion_rate, breakdown.activity_rate),
        }
    }

    /// Prediction cell text.
    pub fn prediction_label(&self, date_format: &str) -> String {
        self.prediction.render(date_format)
    }
}

/// Snapshot of a breakdown row.
pub fn snapshot_of(breakdown: &SkillBreakdown, reference_date: NaiveDate) -> SkillProgressSnapshot {
    SkillProgressSnapshot::new(
        breakdown.completion_rate,
        breakdown.activity_rate,
        reference_date,
    )
}

/// Build rows for the whole table.
pub fn build_rows(breakdown: &[SkillBreakdown], reference_date: NaiveDate) -> Vec<DashboardRow> {
    breakdown
        .iter()
        .map(|row| DashboardRow::from_breakdown(row, reference_date))
        .collect()
}

fn round_percent(rate: f64) -> u8 {
    if rate.is_finite() {
        rate.round().clamp(0.0, 100.0) as u8
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(activity: f64, completion: f64) -> SkillBreakdown {
        SkillBreakdown {
            id: SkillId::new(5),
            name: "SQL".into(),
            resource_count: 4,
            started_count: 1,
            in_progress_count: 0,
            completed_count: 1,
            active_count: 2,
            completion_rate: completion,
            activity_rate: activity,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_row_predicts_and_badges() {
        let r = DashboardRow::from_breakdown(&row(50.0, 25.0), today());
        assert_eq!(r.activity_percent, 50);
        assert_eq!(r.status, SkillStatus::InProgress);
        assert_eq!(r.prediction_label("%Y-%m-%d"), "2024-01-08");
    }

    #[test]
    fn test_row_with_bad_rates_is_indeterminate() {
        let r = DashboardRow::from_breakdown(&row(150.0, 25.0), today());
        assert_eq!(r.prediction, MasteryPrediction::Indeterminate);
        assert_eq!(r.prediction_label("%Y-%m-%d"), "Unable to predict");
        assert_eq!(r.activity_percent, 100);
    }

    #[test]
    fn test_completed_row_with_bad_counters_is_achieved() {
        let mut bad = row(100.0, 100.0);
        bad.completed_count = 9;
        assert!(bad.validate().is_err());
        let r = DashboardRow::from_breakdown(&bad, today());
        assert_eq!(r.prediction, MasteryPrediction::Achieved);
        assert_eq!(r.prediction_label("%Y-%m-%d"), "Achieved");
    }

    #[test]
    fn test_build_rows_order_independent() {
        let input = vec![row(10.0, 0.0), row(90.0, 50.0)];
        let forward = build_rows(&input, today());
        let mut reversed_input = input.clone();
        reversed_input.reverse();
        let mut backward = build_rows(&reversed_input, today());
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(forward[0].prediction.date(), NaiveDate::from_ymd_opt(2024, 3, 4));
    }
}
