//! The SkillStack REST API surface.

use async_trait::async_trait;
use skillstack_core::{
    Category, CategoryDraft, CategoryId, Certification, CertificationDraft, CertificationId,
    Credentials, DashboardStats, Progress, ProgressId, ProgressUpdate, Recommendations,
    Registration, ResourceDetail, ResourceDraft, ResourceId, Skill, SkillBreakdown, SkillDetail,
    SkillDraft, SkillId, User, WeeklySummary,
};
use crate::error::Result;

/// One method per backend endpoint.
///
/// Views and controllers depend on this trait rather than on the HTTP
/// client so they can be driven by an in-memory fake.
#[async_trait]
pub trait SkillStackApi: Send + Sync {
    // === Users ===

    /// Create an account.
    async fn register(&self, registration: &Registration) -> Result<User>;

    /// Sign in and remember the user.
    async fn login(&self, credentials: &Credentials) -> Result<User>;

    /// Sign out and forget the user.
    async fn logout(&self) -> Result<()>;

    /// Current user's profile.
    async fn profile(&self) -> Result<User>;

    // === Skills ===

    /// All skills.
    async fn list_skills(&self) -> Result<Vec<Skill>>;

    /// One skill with its resources.
    async fn get_skill(&self, id: SkillId) -> Result<SkillDetail>;

    /// Create a skill.
    async fn create_skill(&self, draft: &SkillDraft) -> Result<Skill>;

    /// Replace a skill.
    async fn update_skill(&self, id: SkillId, draft: &SkillDraft) -> Result<Skill>;

    /// Delete a skill and its resources.
    async fn delete_skill(&self, id: SkillId) -> Result<()>;

    /// Resources recommended for one skill.
    async fn skill_recommendations(&self, id: SkillId) -> Result<Vec<ResourceDetail>>;

    // === Resources ===

    /// All resources with progress inlined.
    async fn list_resources(&self) -> Result<Vec<ResourceDetail>>;

    /// One resource with progress inlined.
    async fn get_resource(&self, id: ResourceId) -> Result<ResourceDetail>;

    /// Create a resource.
    async fn create_resource(&self, draft: &ResourceDraft) -> Result<ResourceDetail>;

    /// Replace a resource.
    async fn update_resource(&self, id: ResourceId, draft: &ResourceDraft) -> Result<ResourceDetail>;

    /// Delete a resource.
    async fn delete_resource(&self, id: ResourceId) -> Result<()>;

    /// Mark a resource started, creating its progress record if needed.
    async fn start_learning(&self, id: ResourceId) -> Result<Progress>;

    /// Mark a resource completed, creating its progress record if needed.
    async fn mark_complete(&self, id: ResourceId) -> Result<Progress>;

    /// Resources recommended across all skills.
    async fn resource_recommendations(&self) -> Result<Vec<ResourceDetail>>;

    // === Progress ===

    /// All progress records.
    async fn list_progress(&self) -> Result<Vec<Progress>>;

    /// One progress record.
    async fn get_progress(&self, id: ProgressId) -> Result<Progress>;

    /// Patch a progress record.
    async fn update_progress(&self, id: ProgressId, update: &ProgressUpdate) -> Result<Progress>;

    /// Generated summary of the last seven days.
    async fn weekly_summary(&self) -> Result<WeeklySummary>;

    // === Categories ===

    /// All categories.
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// One category.
    async fn get_category(&self, id: CategoryId) -> Result<Category>;

    /// Create a category.
    async fn create_category(&self, draft: &CategoryDraft) -> Result<Category>;

    /// Replace a category.
    async fn update_category(&self, id: CategoryId, draft: &CategoryDraft) -> Result<Category>;

    /// Delete a category.
    async fn delete_category(&self, id: CategoryId) -> Result<()>;

    // === Dashboard ===

    /// Aggregate counters.
    async fn dashboard_stats(&self) -> Result<DashboardStats>;

    /// Per-skill resource counts and rates.
    async fn skills_breakdown(&self) -> Result<Vec<SkillBreakdown>>;

    /// Recommended skills and resources.
    async fn dashboard_recommendations(&self) -> Result<Recommendations>;

    // === Certifications ===

    /// All certifications.
    async fn list_certifications(&self) -> Result<Vec<Certification>>;

    /// One certification.
    async fn get_certification(&self, id: CertificationId) -> Result<Certification>;

    /// Create a certification.
    async fn create_certification(&self, draft: &CertificationDraft) -> Result<Certification>;

    /// Replace a certification.
    async fn update_certification(
        &self,
        id: CertificationId,
        draft: &CertificationDraft,
    ) -> Result<Certification>;

    /// Delete a certification.
    async fn delete_certification(&self, id: CertificationId) -> Result<()>;
}
