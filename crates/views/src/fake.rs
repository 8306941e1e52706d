//! In-memory [`SkillStackApi`] for controller tests.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use skillstack_client::{ApiError, Result, SkillStackApi};
use skillstack_core::{
    Category, CategoryDraft, CategoryId, Certification, CertificationDraft, CertificationId,
    Credentials, DashboardStats, DifficultyLevel, Platform, Progress, ProgressId, ProgressStatus,
    ProgressUpdate, Recommendations, Registration, Resource, ResourceDetail, ResourceDraft,
    ResourceId, ResourceType, Skill, SkillBreakdown, SkillDetail, SkillDraft, SkillId, SkillRef,
    Time, User, UserId, WeeklySummary,
};
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
pub(crate) struct FakeData {
    pub signed_in: bool,
    pub next_id: u64,
    pub skills: Vec<Skill>,
    pub resources: Vec<Resource>,
    pub progress: Vec<Progress>,
    pub categories: Vec<Category>,
    pub certifications: Vec<Certification>,
    pub breakdown: Vec<SkillBreakdown>,
    pub summary: Option<String>,
    pub fail_stats: bool,
    pub calls: Vec<String>,
}

pub(crate) struct FakeApi {
    data: Mutex<FakeData>,
}

pub(crate) fn now() -> Time {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
}

pub(crate) fn skill(id: u64, name: &str) -> Skill {
    Skill {
        id: SkillId::new(id),
        name: name.to_string(),
        description: None,
        category: None,
        target_hours: 10.0,
        difficulty_level: DifficultyLevel::Beginner,
        created_at: now(),
        updated_at: now(),
    }
}

pub(crate) fn resource(id: u64, skill: u64, title: &str) -> Resource {
    Resource {
        id: ResourceId::new(id),
        title: title.to_string(),
        skill: SkillId::new(skill),
        resource_type: ResourceType::Video,
        platform: Platform::Youtube,
        url: None,
        description: None,
        created_at: now(),
        updated_at: now(),
    }
}

pub(crate) fn breakdown(id: u64, name: &str, completion: f64, activity: f64) -> SkillBreakdown {
    SkillBreakdown {
        id: SkillId::new(id),
        name: name.to_string(),
        resource_count: 10,
        started_count: 0,
        in_progress_count: 0,
        completed_count: (completion / 10.0) as u64,
        active_count: (activity / 10.0) as u64,
        completion_rate: completion,
        activity_rate: activity,
    }
}

impl FakeApi {
    /// Two skills, three resources, one progress record; signed in.
    pub fn seeded() -> Self {
        let data = FakeData {
            signed_in: true,
            next_id: 100,
            skills: vec![skill(1, "Rust"), skill(2, "SQL")],
            resources: vec![
                resource(10, 1, "The Book"),
                resource(11, 1, "Rustlings"),
                resource(12, 2, "SQLZoo"),
            ],
            progress: vec![Progress {
                id: ProgressId::new(50),
                resource: ResourceId::new(10),
                status: ProgressStatus::InProgress,
                hours_spent: 2.0,
                notes: None,
                difficulty_rating: Some(3),
                started_at: Some(now()),
                completed_at: None,
                created_at: now(),
                updated_at: now(),
                summary: None,
                key_points: Vec::new(),
            }],
            breakdown: vec![
                breakdown(1, "Rust", 0.0, 50.0),
                breakdown(2, "SQL", 100.0, 100.0),
            ],
            ..Default::default()
        };
        Self { data: Mutex::new(data) }
    }

    pub fn sign_out(&self) {
        self.data.lock().unwrap().signed_in = false;
    }

    pub fn with<T>(&self, f: impl FnOnce(&mut FakeData) -> T) -> T {
        f(&mut self.data.lock().unwrap())
    }

    pub fn calls(&self) -> Vec<String> {
        self.data.lock().unwrap().calls.clone()
    }

    fn open(&self, call: &str) -> Result<MutexGuard<'_, FakeData>> {
        let mut data = self.data.lock().unwrap();
        if !data.signed_in {
            return Err(ApiError::Unauthorized {
                redirect_to: "/login".into(),
            });
        }
        data.calls.push(call.to_string());
        Ok(data)
    }
}

impl FakeData {
    fn id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn detail(&self, resource: &Resource) -> ResourceDetail {
        ResourceDetail {
            resource: resource.clone(),
            skill_name: self
                .skills
                .iter()
                .find(|s| s.id == resource.skill)
                .map(|s| s.name.clone())
                .unwrap_or_default(),
            progress: self.progress.iter().find(|p| p.resource == resource.id).cloned(),
        }
    }

    fn resource_detail(&self, id: ResourceId) -> Result<ResourceDetail> {
        self.resources
            .iter()
            .find(|r| r.id == id)
            .map(|r| self.detail(r))
            .ok_or_else(|| not_found(format!("/resources/{id}/")))
    }

    fn ensure_progress(&mut self, id: ResourceId, status: ProgressStatus) -> Result<Progress> {
        self.resource_detail(id)?;
        if let Some(p) = self.progress.iter_mut().find(|p| p.resource == id) {
            p.status = status;
            return Ok(p.clone());
        }
        let record = Progress {
            id: ProgressId::new(self.id()),
            resource: id,
            status,
            hours_spent: 0.0,
            notes: None,
            difficulty_rating: None,
            started_at: Some(now()),
            completed_at: None,
            created_at: now(),
            updated_at: now(),
            summary: None,
            key_points: Vec::new(),
        };
        self.progress.push(record.clone());
        Ok(record)
    }
}

fn not_found(path: String) -> ApiError {
    ApiError::NotFound { path }
}

#[async_trait]
impl SkillStackApi for FakeApi {
    async fn register(&self, registration: &Registration) -> Result<User> {
        Ok(User {
            id: UserId::new(1),
            username: registration.username.clone(),
            email: Some(registration.email.clone()),
        })
    }

    async fn login(&self, credentials: &Credentials) -> Result<User> {
        credentials.validate()?;
        self.data.lock().unwrap().signed_in = true;
        Ok(User {
            id: UserId::new(1),
            username: credentials.username.clone(),
            email: None,
        })
    }

    async fn logout(&self) -> Result<()> {
        self.sign_out();
        Ok(())
    }

    async fn profile(&self) -> Result<User> {
        self.open("profile")?;
        Ok(User {
            id: UserId::new(1),
            username: "learner".into(),
            email: None,
        })
    }

    async fn list_skills(&self) -> Result<Vec<Skill>> {
        Ok(self.open("list_skills")?.skills.clone())
    }

    async fn get_skill(&self, id: SkillId) -> Result<SkillDetail> {
        let data = self.open("get_skill")?;
        let skill = data
            .skills
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| not_found(format!("/skills/{id}/")))?;
        let resources = data.resources.iter().filter(|r| r.skill == id).cloned().collect();
        Ok(SkillDetail { skill, resources })
    }

    async fn create_skill(&self, draft: &SkillDraft) -> Result<Skill> {
        let draft = draft.validate()?;
        let mut data = self.open("create_skill")?;
        let mut created = skill(data.id(), &draft.name);
        created.target_hours = draft.target_hours;
        data.skills.push(created.clone());
        Ok(created)
    }

    async fn update_skill(&self, id: SkillId, draft: &SkillDraft) -> Result<Skill> {
        let draft = draft.validate()?;
        let mut data = self.open("update_skill")?;
        let found = data
            .skills
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| not_found(format!("/skills/{id}/")))?;
        found.name = draft.name;
        found.target_hours = draft.target_hours;
        Ok(found.clone())
    }

    async fn delete_skill(&self, id: SkillId) -> Result<()> {
        let mut data = self.open("delete_skill")?;
        let before = data.skills.len();
        data.skills.retain(|s| s.id != id);
        if data.skills.len() == before {
            return Err(not_found(format!("/skills/{id}/")));
        }
        data.resources.retain(|r| r.skill != id);
        Ok(())
    }

    async fn skill_recommendations(&self, id: SkillId) -> Result<Vec<ResourceDetail>> {
        let data = self.open("skill_recommendations")?;
        Ok(data
            .resources
            .iter()
            .filter(|r| r.skill == id)
            .map(|r| data.detail(r))
            .filter(|d| d.progress.is_none())
            .collect())
    }

    async fn list_resources(&self) -> Result<Vec<ResourceDetail>> {
        let data = self.open("list_resources")?;
        Ok(data.resources.iter().map(|r| data.detail(r)).collect())
    }

    async fn get_resource(&self, id: ResourceId) -> Result<ResourceDetail> {
        self.open("get_resource")?.resource_detail(id)
    }

    async fn create_resource(&self, draft: &ResourceDraft) -> Result<ResourceDetail> {
        let draft = draft.validate()?;
        let mut data = self.open("create_resource")?;
        let id = data.id();
        let created = resource(id, draft.skill.map_or(0, |s| s.value()), &draft.title);
        data.resources.push(created.clone());
        Ok(data.detail(&created))
    }

    async fn update_resource(&self, id: ResourceId, draft: &ResourceDraft) -> Result<ResourceDetail> {
        let draft = draft.validate()?;
        let mut data = self.open("update_resource")?;
        let found = data
            .resources
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(format!("/resources/{id}/")))?;
        found.title = draft.title;
        let found = found.clone();
        Ok(data.detail(&found))
    }

    async fn delete_resource(&self, id: ResourceId) -> Result<()> {
        let mut data = self.open("delete_resource")?;
        data.resources.retain(|r| r.id != id);
        Ok(())
    }

    async fn start_learning(&self, id: ResourceId) -> Result<Progress> {
        self.open("start_learning")?
            .ensure_progress(id, ProgressStatus::Started)
    }

    async fn mark_complete(&self, id: ResourceId) -> Result<Progress> {
        self.open("mark_complete")?
            .ensure_progress(id, ProgressStatus::Completed)
    }

    async fn resource_recommendations(&self) -> Result<Vec<ResourceDetail>> {
        let data = self.open("resource_recommendations")?;
        Ok(data
            .resources
            .iter()
            .map(|r| data.detail(r))
            .filter(|d| d.progress.is_none())
            .collect())
    }

    async fn list_progress(&self) -> Result<Vec<Progress>> {
        Ok(self.open("list_progress")?.progress.clone())
    }

    async fn get_progress(&self, id: ProgressId) -> Result<Progress> {
        self.open("get_progress")?
            .progress
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| not_found(format!("/progress/{id}/")))
    }

    async fn update_progress(&self, id: ProgressId, update: &ProgressUpdate) -> Result<Progress> {
        let update = update.validate()?;
        let mut data = self.open("update_progress")?;
        let record = data
            .progress
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found(format!("/progress/{id}/")))?;
        record.status = update.status;
        record.hours_spent = update.hours_spent;
        record.notes = update.notes;
        record.difficulty_rating = Some(update.difficulty_rating);
        Ok(record.clone())
    }

    async fn weekly_summary(&self) -> Result<WeeklySummary> {
        let data = self.open("weekly_summary")?;
        match &data.summary {
            Some(summary) => Ok(WeeklySummary {
                summary: summary.clone(),
            }),
            None => Err(ApiError::Validation {
                message: "no activity this week".into(),
            }),
        }
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.open("list_categories")?.categories.clone())
    }

    async fn get_category(&self, id: CategoryId) -> Result<Category> {
        self.open("get_category")?
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| not_found(format!("/categories/{id}/")))
    }

    async fn create_category(&self, draft: &CategoryDraft) -> Result<Category> {
        let draft = draft.validate()?;
        let mut data = self.open("create_category")?;
        let category = Category {
            id: CategoryId::new(data.id()),
            name: draft.name,
            description: draft.description,
            created_at: now(),
        };
        data.categories.push(category.clone());
        Ok(category)
    }

    async fn update_category(&self, id: CategoryId, draft: &CategoryDraft) -> Result<Category> {
        let draft = draft.validate()?;
        let mut data = self.open("update_category")?;
        let found = data
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found(format!("/categories/{id}/")))?;
        found.name = draft.name;
        found.description = draft.description;
        Ok(found.clone())
    }

    async fn delete_category(&self, id: CategoryId) -> Result<()> {
        self.open("delete_category")?.categories.retain(|c| c.id != id);
        Ok(())
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats> {
        let data = self.open("dashboard_stats")?;
        if data.fail_stats {
            return Err(ApiError::Validation {
                message: "stats unavailable".into(),
            });
        }
        Ok(DashboardStats {
            total_skills: data.skills.len() as u64,
            total_resources: data.resources.len() as u64,
            ..Default::default()
        })
    }

    async fn skills_breakdown(&self) -> Result<Vec<SkillBreakdown>> {
        Ok(self.open("skills_breakdown")?.breakdown.clone())
    }

    async fn dashboard_recommendations(&self) -> Result<Recommendations> {
        let data = self.open("dashboard_recommendations")?;
        Ok(Recommendations {
            skills: data.skills.iter().take(1).cloned().collect(),
            resources: Vec::new(),
        })
    }

    async fn list_certifications(&self) -> Result<Vec<Certification>> {
        Ok(self.open("list_certifications")?.certifications.clone())
    }

    async fn get_certification(&self, id: CertificationId) -> Result<Certification> {
        self.open("get_certification")?
            .certifications
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| not_found(format!("/certifications/{id}/")))
    }

    async fn create_certification(&self, draft: &CertificationDraft) -> Result<Certification> {
        let draft = draft.validate()?;
        let mut data = self.open("create_certification")?;
        let cert = Certification {
            id: CertificationId::new(data.id()),
            name: draft.name,
            issuing_organization: draft.issuing_organization,
            description: draft.description,
            skills: draft.skills.into_iter().map(SkillRef::Id).collect(),
            issue_date: draft.issue_date.unwrap_or_default(),
            expiration_date: draft.expiration_date,
            credential_id: draft.credential_id,
            credential_url: draft.credential_url,
            created_at: now(),
            updated_at: now(),
        };
        data.certifications.push(cert.clone());
        Ok(cert)
    }

    async fn update_certification(
        &self,
        id: CertificationId,
        draft: &CertificationDraft,
    ) -> Result<Certification> {
        let draft = draft.validate()?;
        let mut data = self.open("update_certification")?;
        let found = data
            .certifications
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found(format!("/certifications/{id}/")))?;
        found.name = draft.name;
        found.issuing_organization = draft.issuing_organization;
        found.expiration_date = draft.expiration_date;
        Ok(found.clone())
    }

    async fn delete_certification(&self, id: CertificationId) -> Result<()> {
        self.open("delete_certification")?
            .certifications
            .retain(|c| c.id != id);
        Ok(())
    }
}
