//! Resource model - a course, video, book or article attached to a skill.

use serde::{Deserialize, Serialize};
use crate::error::{optional, required, CoreError, Result};
use crate::id::{ResourceId, SkillId};
use crate::progress::{Progress, ProgressStatus};
use crate::Time;

/// A learning resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique identifier
    pub id: ResourceId,

    /// Title
    pub title: String,

    /// Owning skill
    pub skill: SkillId,

    /// Kind of resource
    pub resource_type: ResourceType,

    /// Where it is hosted
    pub platform: Platform,

    /// Link to the resource
    #[serde(default)]
    pub url: Option<String>,

    /// Description
    #[serde(default)]
    pub description: Option<String>,

    /// When created
    pub created_at: Time,

    /// Last updated
    pub updated_at: Time,
}

/// A resource with its skill name and progress record inlined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDetail {
    /// The resource itself
    #[serde(flatten)]
    pub resource: Resource,

    /// Name of the owning skill
    #[serde(default)]
    pub skill_name: String,

    /// Progress record, absent until the user starts the resource
    #[serde(default)]
    pub progress: Option<Progress>,
}

impl ResourceDetail {
    /// Effective status; a resource without a record has not been started.
    pub fn status(&self) -> ProgressStatus {
        self.progress
            .as_ref()
            .map(|p| p.status)
            .unwrap_or(ProgressStatus::NotStarted)
    }
}

/// Kind of learning resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// Video or playlist
    Video,
    /// Structured course
    Course,
    /// Blog post or article
    Article,
    /// Book
    Book,
    /// Hands-on tutorial
    Tutorial,
    /// Anything else, including values this client does not know
    #[serde(other)]
    Other,
}

impl ResourceType {
    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Course => "course",
            Self::Article => "article",
            Self::Book => "book",
            Self::Tutorial => "tutorial",
            Self::Other => "other",
        }
    }
}

/// Hosting platform of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Platform {
    Udemy,
    Youtube,
    Coursera,
    Edx,
    Pluralsight,
    LinkedinLearning,
    /// Self-hosted or unknown platform
    #[serde(other)]
    Other,
}

impl Platform {
    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Udemy => "udemy",
            Self::Youtube => "youtube",
            Self::Coursera => "coursera",
            Self::Edx => "edx",
            Self::Pluralsight => "pluralsight",
            Self::LinkedinLearning => "linkedin_learning",
            Self::Other => "other",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Udemy => "Udemy",
            Self::Youtube => "YouTube",
            Self::Coursera => "Coursera",
            Self::Edx => "edX",
            Self::Pluralsight => "Pluralsight",
            Self::LinkedinLearning => "LinkedIn Learning",
            Self::Other => "Other",
        }
    }
}

/// Payload for creating or updating a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDraft {
    /// Title
    pub title: String,

    /// Owning skill; must be chosen before saving
    pub skill: Option<SkillId>,

    /// Kind of resource
    pub resource_type: ResourceType,

    /// Platform
    pub platform: Platform,

    /// Link
    pub url: Option<String>,

    /// Description
    pub description: Option<String>,
}

impl Default for ResourceDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            skill: None,
            resource_type: ResourceType::Video,
            platform: Platform::Udemy,
            url: None,
            description: None,
        }
    }
}

impl ResourceDraft {
    /// Pre-fill a draft from an existing resource.
    pub fn from_resource(resource: &Resource) -> Self {
        Self {
            title: resource.title.clone(),
            skill: Some(resource.skill),
            resource_type: resource.resource_type,
            platform: resource.platform,
            url: resource.url.clone(),
            description: resource.description.clone(),
        }
    }

    /// Validate and normalize.
    pub fn validate(&self) -> Result<Self> {
        let skill = self.skill.ok_or_else(|| {
            CoreError::validation("skill", "Please select a skill for this resource")
        })?;

        Ok(Self {
            title: required("title", &self.title)?,
            skill: Some(skill),
            resource_type: self.resource_type,
            platform: self.platform,
            url: optional(self.url.as_deref()),
            description: optional(self.description.as_deref()),
        })
    }
}
