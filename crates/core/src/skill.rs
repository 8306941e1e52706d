//! Skill model - something the user is learning.

use serde::{Deserialize, Serialize};
use crate::error::{optional, required, CoreError, Result};
use crate::id::SkillId;
use crate::resource::Resource;
use crate::Time;

/// A skill the user tracks resources and progress against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Unique identifier
    pub id: SkillId,

    /// Skill name
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,

    /// Free-form category label
    #[serde(default)]
    pub category: Option<String>,

    /// Hours the user intends to invest
    #[serde(with = "crate::decimal", default)]
    pub target_hours: f64,

    /// Self-assessed difficulty
    #[serde(default)]
    pub difficulty_level: DifficultyLevel,

    /// When created
    pub created_at: Time,

    /// Last updated
    pub updated_at: Time,
}

/// A skill together with its resources, as returned by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDetail {
    /// The skill itself
    #[serde(flatten)]
    pub skill: Skill,

    /// Resources attached to the skill
    #[serde(default)]
    pub resources: Vec<Resource>,
}

/// Skill difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DifficultyLevel {
    /// New to the topic
    #[default]
    Beginner,
    /// Some prior experience
    Intermediate,
    /// Deep prior experience
    Advanced,
}

impl DifficultyLevel {
    /// Wire and display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl std::str::FromStr for DifficultyLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(CoreError::validation(
                "difficulty_level",
                format!("\"{other}\" is not a valid choice."),
            )),
        }
    }
}

/// Payload for creating or updating a skill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillDraft {
    /// Skill name
    pub name: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Category label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Target hours; blank input is sent as zero
    pub target_hours: f64,

    /// Difficulty
    pub difficulty_level: DifficultyLevel,
}

impl SkillDraft {
    /// Create a draft with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Pre-fill a draft from an existing skill for editing.
    pub fn from_skill(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            description: skill.description.clone(),
            category: skill.category.clone(),
            target_hours: skill.target_hours,
            difficulty_level: skill.difficulty_level,
        }
    }

    /// Validate and normalize into the payload sent to the backend.
    pub fn validate(&self) -> Result<Self> {
        let name = required("name", &self.name)?;
        if !self.target_hours.is_finite() || self.target_hours < 0.0 {
            return Err(CoreError::validation(
                "target_hours",
                "Ensure this value is greater than or equal to 0.",
            ));
        }

        Ok(Self {
            name,
            description: optional(self.description.as_deref()),
            category: optional(self.category.as_deref()),
            target_hours: self.target_hours,
            difficulty_level: self.difficulty_level,
        })
    }
}
