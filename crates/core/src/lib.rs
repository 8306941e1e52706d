//! SkillStack core data models.
//!
//! Typed contracts for everything the SkillStack REST API sends and
//! accepts: skills, resources, progress, categories, certifications and
//! the dashboard aggregates. Drafts validate and normalize form input
//! before it leaves the client.

#![warn(missing_docs)]

// Identities and validation
mod id;
mod error;
pub mod decimal;

// Learning catalog
mod skill;
mod resource;
mod progress;
mod category;
mod certification;

// Aggregates and envelopes
mod dashboard;
mod listing;
mod user;

// Re-exports
pub use id::*;
pub use error::{check_percentage, CoreError, Result};

pub use skill::{DifficultyLevel, Skill, SkillDetail, SkillDraft};
pub use resource::{Platform, Resource, ResourceDetail, ResourceDraft, ResourceType};
pub use progress::{Progress, ProgressStatus, ProgressUpdate};
pub use category::{Category, CategoryDraft};
pub use certification::{Certification, CertificationDraft, SkillRef};

pub use dashboard::{
    share_of, DashboardStats, PlatformCount, Recommendations, SkillBreakdown, StatusCount,
    TypeCount, WeeklySummary,
};
pub use listing::Listing;
pub use user::{Credentials, Registration, User};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
