//! Skill status badge.

use serde::{Deserialize, Serialize};

/// Coarse status of a skill, shown next to its predicted mastery date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillStatus {
    /// Every resource completed
    Completed,
    /// Some activity, not all complete
    InProgress,
    /// No activity
    NotStarted,
}

impl SkillStatus {
    /// Derive the badge from completion and activity rates.
    pub fn from_rates(completion_rate: f64, activity_rate: f64) -> Self {
        if completion_rate == 100.0 {
            Self::Completed
        } else if activity_rate > 0.0 {
            Self::InProgress
        } else {
            Self::NotStarted
        }
    }

    /// Badge text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::NotStarted => "Not Started",
        }
    }
}

impl std::fmt::Display for SkillStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
