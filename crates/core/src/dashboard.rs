//! Response contracts for the dashboard endpoints.

use serde::{Deserialize, Serialize};
use crate::error::{check_percentage, CoreError, Result};
use crate::id::SkillId;
use crate::progress::ProgressStatus;
use crate::resource::{Platform, ResourceDetail, ResourceType};
use crate::skill::Skill;

/// Aggregate counters shown at the top of the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Number of skills
    pub total_skills: u64,

    /// Number of resources
    pub total_resources: u64,

    /// Number of certifications
    #[serde(default)]
    pub total_certifications: u64,

    /// Resources marked completed
    pub completed_resources: u64,

    /// Percentage of resources completed (0-100)
    pub completion_rate: f64,

    /// Resource counts grouped by platform
    #[serde(default)]
    pub resources_by_platform: Vec<PlatformCount>,

    /// Resource counts grouped by type
    #[serde(default)]
    pub resources_by_type: Vec<TypeCount>,

    /// Progress updates in the last seven days, grouped by status
    #[serde(default)]
    pub recent_activity: Vec<StatusCount>,
}

/// Resources hosted on one platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformCount {
    /// Platform
    pub platform: Platform,
    /// Resource count
    pub count: u64,
}

/// Resources of one type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeCount {
    /// Resource type
    pub resource_type: ResourceType,
    /// Resource count
    pub count: u64,
}

/// Recent progress updates with one status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    /// Status
    pub status: ProgressStatus,
    /// Update count
    pub count: u64,
}

/// Percentage of `total` that `count` represents; zero when `total` is zero.
pub fn share_of(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

impl PlatformCount {
    /// Bar width as a percentage of all resources.
    pub fn share_of(&self, total: u64) -> f64 {
        share_of(self.count, total)
    }
}

impl TypeCount {
    /// Bar width as a percentage of all resources.
    pub fn share_of(&self, total: u64) -> f64 {
        share_of(self.count, total)
    }
}

/// Per-skill row of the skills breakdown endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillBreakdown {
    /// Skill id
    pub id: SkillId,

    /// Skill name
    pub name: String,

    /// Resources attached to the skill
    pub resource_count: u64,

    /// Resources with status `started`
    #[serde(default)]
    pub started_count: u64,

    /// Resources with status `in_progress`
    #[serde(default)]
    pub in_progress_count: u64,

    /// Resources with status `completed`
    pub completed_count: u64,

    /// Started, in-progress and completed resources
    pub active_count: u64,

    /// Percentage of resources completed (0-100)
    pub completion_rate: f64,

    /// Percentage of resources active (0-100)
    pub activity_rate: f64,
}

impl SkillBreakdown {
    /// Check the row against its declared domain.
    ///
    /// Rates must be finite and within `[0, 100]`, and the counters must
    /// not exceed the resource count.
    pub fn validate(&self) -> Result<()> {
        check_percentage("completion_rate", self.completion_rate)?;
        check_percentage("activity_rate", self.activity_rate)?;

        if self.active_count > self.resource_count {
            return Err(CoreError::validation(
                "active_count",
                format!(
                    "{} active resources exceed the {} attached",
                    self.active_count, self.resource_count
                ),
            ));
        }
        if self.completed_count > self.active_count {
            return Err(CoreError::validation(
                "completed_count",
                format!(
                    "{} completed resources exceed the {} active",
                    self.completed_count, self.active_count
                ),
            ));
        }
        Ok(())
    }
}

/// Recommended skills and resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    /// Recommended skills
    #[serde(default)]
    pub skills: Vec<Skill>,

    /// Recommended resources
    #[serde(default)]
    pub resources: Vec<ResourceDetail>,
}

impl Recommendations {
    /// True when there is nothing to recommend.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.resources.is_empty()
    }
}

/// Generated weekly summary text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Summary body
    #[serde(default)]
    pub summary: String,
}

impl WeeklySummary {
    /// Text to display; falls back when the server returned nothing.
    pub fn display_text(&self) -> &str {
        if self.summary.trim().is_empty() {
            "No summary available."
        } else {
            &self.summary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(active: u64, completed: u64, total: u64, activity: f64, completion: f64) -> SkillBreakdown {
        SkillBreakdown {
            id: SkillId::new(1),
            name: "Rust".into(),
            resource_count: total,
            started_count: active - completed,
            in_progress_count: 0,
            completed_count: completed,
            active_count: active,
            completion_rate: completion,
            activity_rate: activity,
        }
    }

    #[test]
    fn test_stats_deserialize() {
        let json = r#"{
            "total_skills": 2, "total_resources": 4, "total_certifications": 1,
            "completed_resources": 1, "completion_rate": 25.0,
            "resources_by_platform": [{"platform": "udemy", "count": 3}, {"platform": "youtube", "count": 1}],
            "resources_by_type": [{"resource_type": "course", "count": 4}],
            "recent_activity": [{"status": "completed", "count": 1}]
        }"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.resources_by_platform[0].platform, Platform::Udemy);
        assert_eq!(stats.resources_by_platform[0].share_of(stats.total_resources), 75.0);
        assert_eq!(stats.recent_activity[0].status, ProgressStatus::Completed);
    }

    #[test]
    fn test_share_of_zero_total() {
        assert_eq!(share_of(3, 0), 0.0);
    }

    #[test]
    fn test_breakdown_validate() {
        assert!(breakdown(2, 1, 4, 50.0, 25.0).validate().is_ok());
        assert!(breakdown(2, 1, 4, 150.0, 25.0).validate().is_err());
        assert!(breakdown(2, 1, 4, 50.0, -1.0).validate().is_err());
        assert!(breakdown(5, 1, 4, 50.0, 25.0).validate().is_err());
    }

    #[test]
    fn test_weekly_summary_fallback() {
        assert_eq!(WeeklySummary::default().display_text(), "No summary available.");
        let s = WeeklySummary { summary: "Busy week".into() };
        assert_eq!(s.display_text(), "Busy week");
    }

    #[test]
    fn test_recommendations_empty() {
        let r: Recommendations = serde_json::from_str(r#"{"skills": [], "resources": []}"#).unwrap();
        assert!(r.is_empty());
    }
}
