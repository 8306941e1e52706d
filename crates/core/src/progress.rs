//! Progress model - the user's state on a single resource.

use serde::{Deserialize, Serialize};
use crate::error::{CoreError, Result};
use crate::id::{ProgressId, ResourceId};
use crate::Time;

/// Progress on one resource. At most one record exists per resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// Unique identifier
    pub id: ProgressId,

    /// Resource this record tracks
    pub resource: ResourceId,

    /// Current status
    pub status: ProgressStatus,

    /// Hours logged so far
    #[serde(with = "crate::decimal", default)]
    pub hours_spent: f64,

    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,

    /// Difficulty on a 1-5 scale
    #[serde(default)]
    pub difficulty_rating: Option<u8>,

    /// When the user started
    #[serde(default)]
    pub started_at: Option<Time>,

    /// When the user finished
    #[serde(default)]
    pub completed_at: Option<Time>,

    /// When created
    pub created_at: Time,

    /// Last updated
    pub updated_at: Time,

    /// Server-generated summary of the notes
    #[serde(default)]
    pub summary: Option<String>,

    /// Server-extracted key points from the notes
    #[serde(default)]
    pub key_points: Vec<String>,
}

/// Status of a progress record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    /// Not started yet
    #[default]
    NotStarted,
    /// Opened at least once
    Started,
    /// Actively working through it
    InProgress,
    /// Finished
    Completed,
}

impl ProgressStatus {
    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Started => "started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Lowercase label with spaces, as shown in status badges.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "not started",
            Self::Started => "started",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
        }
    }

    /// Whether the resource counts towards a skill's activity.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::NotStarted)
    }
}

impl std::str::FromStr for ProgressStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "not_started" => Ok(Self::NotStarted),
            "started" => Ok(Self::Started),
            "in_progress" => Ok(Self::InProgress),
            "completed" | "done" => Ok(Self::Completed),
            other => Err(CoreError::validation(
                "status",
                format!("\"{other}\" is not a valid choice."),
            )),
        }
    }
}

/// Partial update sent with PATCH to a progress record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    /// New status
    pub status: ProgressStatus,

    /// Hours logged
    pub hours_spent: f64,

    /// Notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Difficulty on a 1-5 scale
    pub difficulty_rating: u8,
}

impl Default for ProgressUpdate {
    fn default() -> Self {
        Self {
            status: ProgressStatus::NotStarted,
            hours_spent: 0.0,
            notes: None,
            difficulty_rating: 3,
        }
    }
}

impl ProgressUpdate {
    /// Pre-fill from an existing record, or the defaults when there is none.
    pub fn from_progress(progress: Option<&Progress>) -> Self {
        match progress {
            Some(p) => Self {
                status: p.status,
                hours_spent: p.hours_spent,
                notes: p.notes.clone(),
                difficulty_rating: p.difficulty_rating.unwrap_or(3),
            },
            None => Self::default(),
        }
    }

    /// Validate ranges.
    pub fn validate(&self) -> Result<Self> {
        if !self.hours_spent.is_finite() || self.hours_spent < 0.0 {
            return Err(CoreError::validation(
                "hours_spent",
                "Ensure this value is greater than or equal to 0.",
            ));
        }
        if !(1..=5).contains(&self.difficulty_rating) {
            return Err(CoreError::validation(
                "difficulty_rating",
                format!("\"{}\" is not a valid choice.", self.difficulty_rating),
            ));
        }
        Ok(self.clone())
    }
}
