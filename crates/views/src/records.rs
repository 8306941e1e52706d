//! CRUD bindings between list pages and the API.

use async_trait::async_trait;
use skillstack_client::{Result, SkillStackApi};
use skillstack_core::{
    Category, CategoryDraft, CategoryId, Certification, CertificationDraft, CertificationId,
    ResourceDetail, ResourceDraft, ResourceId, Skill, SkillDraft, SkillId,
};
use std::fmt::{Debug, Display};

/// A record managed by one of the CRUD list pages.
#[async_trait]
pub trait Record: Clone + Debug + Send + Sync + Sized + 'static {
    /// Primary key type
    type Id: Copy + Eq + Debug + Display + Send + Sync;

    /// Form payload type
    type Draft: Clone + Debug + Default + PartialEq + Send + Sync;

    /// Singular noun used in messages, e.g. "skill"
    const NOUN: &'static str;

    /// Plural noun used in messages, e.g. "skills"
    const PLURAL: &'static str;

    /// Primary key.
    fn id(&self) -> Self::Id;

    /// Form pre-filled for editing.
    fn to_draft(&self) -> Self::Draft;

    /// Fetch all records.
    async fn fetch_all<A: SkillStackApi + ?Sized>(api: &A) -> Result<Vec<Self>>;

    /// Create a record.
    async fn create<A: SkillStackApi + ?Sized>(api: &A, draft: &Self::Draft) -> Result<()>;

    /// Replace a record.
    async fn update<A: SkillStackApi + ?Sized>(api: &A, id: Self::Id, draft: &Self::Draft) -> Result<()>;

    /// Delete a record.
    async fn delete<A: SkillStackApi + ?Sized>(api: &A, id: Self::Id) -> Result<()>;
}

#[async_trait]
impl Record for Skill {
    type Id = SkillId;
    type Draft = SkillDraft;
    const NOUN: &'static str = "skill";
    const PLURAL: &'static str = "skills";

    fn id(&self) -> SkillId {
        self.id
    }

    fn to_draft(&self) -> SkillDraft {
        SkillDraft::from_skill(self)
    }

    async fn fetch_all<A: SkillStackApi + ?Sized>(api: &A) -> Result<Vec<Self>> {
        api.list_skills().await
    }

    async fn create<A: SkillStackApi + ?Sized>(api: &A, draft: &SkillDraft) -> Result<()> {
        api.create_skill(draft).await.map(drop)
    }

    async fn update<A: SkillStackApi + ?Sized>(api: &A, id: SkillId, draft: &SkillDraft) -> Result<()> {
        api.update_skill(id, draft).await.map(drop)
    }

    async fn delete<A: SkillStackApi + ?Sized>(api: &A, id: SkillId) -> Result<()> {
        api.delete_skill(id).await
    }
}

#[async_trait]
impl Record for ResourceDetail {
    type Id = ResourceId;
    type Draft = ResourceDraft;
    const NOUN: &'static str = "resource";
    const PLURAL: &'static str = "resources";

    fn id(&self) -> ResourceId {
        self.resource.id
    }

    fn to_draft(&self) -> ResourceDraft {
        ResourceDraft::from_resource(&self.resource)
    }

    async fn fetch_all<A: SkillStackApi + ?Sized>(api: &A) -> Result<Vec<Self>> {
        api.list_resources().await
    }

    async fn create<A: SkillStackApi + ?Sized>(api: &A, draft: &ResourceDraft) -> Result<()> {
        api.create_resource(draft).await.map(drop)
    }

    async fn update<A: SkillStackApi + ?Sized>(api: &A, id: ResourceId, draft: &ResourceDraft) -> Result<()> {
        api.update_resource(id, draft).await.map(drop)
    }

    async fn delete<A: SkillStackApi + ?Sized>(api: &A, id: ResourceId) -> Result<()> {
        api.delete_resource(id).await
    }
}

#[async_trait]
impl Record for Category {
    type Id = CategoryId;
    type Draft = CategoryDraft;
    const NOUN: &'static str = "category";
    const PLURAL: &'static str = "categories";

    fn id(&self) -> CategoryId {
        self.id
    }

    fn to_draft(&self) -> CategoryDraft {
        CategoryDraft::from_category(self)
    }

    async fn fetch_all<A: SkillStackApi + ?Sized>(api: &A) -> Result<Vec<Self>> {
        api.list_categories().await
    }

    async fn create<A: SkillStackApi + ?Sized>(api: &A, draft: &CategoryDraft) -> Result<()> {
        api.create_category(draft).await.map(drop)
    }

    async fn update<A: SkillStackApi + ?Sized>(api: &A, id: CategoryId, draft: &CategoryDraft) -> Result<()> {
        api.update_category(id, draft).await.map(drop)
    }

    async fn delete<A: SkillStackApi + ?Sized>(api: &A, id: CategoryId) -> Result<()> {
        api.delete_category(id).await
    }
}

#[async_trait]
impl Record for Certification {
    type Id = CertificationId;
    type Draft = CertificationDraft;
    const NOUN: &'static str = "certification";
    const PLURAL: &'static str = "certifications";

    fn id(&self) -> CertificationId {
        self.id
    }

    fn to_draft(&self) -> CertificationDraft {
        CertificationDraft::from_certification(self)
    }

    async fn fetch_all<A: SkillStackApi + ?Sized>(api: &A) -> Result<Vec<Self>> {
        api.list_certifications().await
    }

    async fn create<A: SkillStackApi + ?Sized>(api: &A, draft: &CertificationDraft) -> Result<()> {
        api.create_certification(draft).await.map(drop)
    }

    async fn update<A: SkillStackApi + ?Sized>(
        api: &A,
        id: CertificationId,
        draft: &CertificationDraft,
    ) -> Result<()> {
        api.update_certification(id, draft).await.map(drop)
    }

    async fn delete<A: SkillStackApi + ?Sized>(api: &A, id: CertificationId) -> Result<()> {
        api.delete_certification(id).await
    }
}
