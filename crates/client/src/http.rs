//! `reqwest` implementation of [`SkillStackApi`].

use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, ClientBuilder, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use skillstack_core::{
    Category, CategoryDraft, CategoryId, Certification, CertificationDraft, CertificationId,
    Credentials, DashboardStats, Listing, Progress, ProgressId, ProgressUpdate, Recommendations,
    Registration, ResourceDetail, ResourceDraft, ResourceId, Skill, SkillBreakdown, SkillDetail,
    SkillDraft, SkillId, User, WeeklySummary,
};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::api::SkillStackApi;
use crate::config::ClientConfig;
use crate::error::{classify, ApiError, Result};
use crate::session::{MemorySessionStore, SessionStore};

/// Name of the cookie carrying Django's CSRF token.
const CSRF_COOKIE: &str = "csrftoken";

/// Header the backend expects the CSRF token in.
const CSRF_HEADER: &str = "X-CSRFToken";

/// HTTP client for the SkillStack backend.
///
/// Keeps the session cookie between calls, echoes the CSRF cookie back as a
/// header, and clears the session store whenever the backend answers 401 or
/// 403.
#[derive(Clone)]
pub struct HttpApi {
    /// HTTP client
    client: Client,

    /// Cookie jar shared with `client`
    jar: Arc<Jar>,

    /// Configuration
    config: ClientConfig,

    /// Signed-in user
    session: Arc<dyn SessionStore>,
}

impl HttpApi {
    /// Create a client with an in-memory session store.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_session(config, Arc::new(MemorySessionStore::new()))
    }

    /// Create a client backed by `session`.
    pub fn with_session(config: ClientConfig, session: Arc<dyn SessionStore>) -> Result<Self> {
        let jar = Arc::new(Jar::default());
        let client = ClientBuilder::new()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .cookie_provider(jar.clone())
            .build()?;

        Ok(Self {
            client,
            jar,
            config,
            session,
        })
    }

    /// Configuration in use.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Session store in use.
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// CSRF token from the cookie jar, if the backend has set one.
    fn csrf_token(&self) -> Option<String> {
        let url = reqwest::Url::parse(&self.config.base_url).ok()?;
        let header = self.jar.cookies(&url)?;
        csrf_from_cookie_header(header.to_str().ok()?)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.client.request(method, self.config.url(path));
        if let Some(token) = self.csrf_token() {
            builder = builder.header(CSRF_HEADER, token);
        }
        builder
    }

    /// Send a request and return the raw body of a successful response.
    async fn send(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> Result<String> {
        debug!(%method, path, "API request");

        let mut builder = self.request(method, path);
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            return Ok(text);
        }

        let error = classify(status, path, &text, &self.config.login_path);
        if error.is_unauthorized() {
            warn!(%status, path, "session rejected, clearing signed-in user");
            self.session.clear();
        } else {
            debug!(%status, path, "API request failed");
        }
        Err(error)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let text = self.send(Method::GET, path, None).await?;
        decode(path, &text)
    }

    async fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let listing: Listing<T> = self.get(path).await?;
        Ok(listing.into_items())
    }

    async fn write<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })?;
        let text = self.send(method, path, Some(body)).await?;
        decode(path, &text)
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let text = self.send(Method::POST, path, None).await?;
        decode(path, &text)
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path, None).await?;
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(path: &str, text: &str) -> Result<T> {
    // DELETE and some actions answer 204 with no body.
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|source| ApiError::Decode {
        path: path.to_string(),
        source,
    })
}

/// Extract the CSRF token from a `Cookie` header value.
pub fn csrf_from_cookie_header(header: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(CSRF_COOKIE)?.strip_prefix('='))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// Login and profile endpoints answer either the user or `{"user": ...}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum UserEnvelope {
    Wrapped { user: User },
    Bare(User),
}

impl From<UserEnvelope> for User {
    fn from(envelope: UserEnvelope) -> Self {
        match envelope {
            UserEnvelope::Wrapped { user } | UserEnvelope::Bare(user) => user,
        }
    }
}

#[async_trait]
impl SkillStackApi for HttpApi {
    async fn register(&self, registration: &Registration) -> Result<User> {
        let user: UserEnvelope = self.write(Method::POST, "/users/register/", registration).await?;
        Ok(user.into())
    }

    async fn login(&self, credentials: &Credentials) -> Result<User> {
        credentials.validate()?;
        let user: User = self
            .write::<_, UserEnvelope>(Method::POST, "/users/login/", credentials)
            .await?
            .into();
        self.session.set_user(user.clone());
        Ok(user)
    }

    async fn logout(&self) -> Result<()> {
        let result = self.send(Method::POST, "/users/logout/", None).await;
        self.session.clear();
        result.map(|_| ())
    }

    async fn profile(&self) -> Result<User> {
        let user: UserEnvelope = self.get("/users/profile/").await?;
        Ok(user.into())
    }

    async fn list_skills(&self) -> Result<Vec<Skill>> {
        self.list("/skills/").await
    }

    async fn get_skill(&self, id: SkillId) -> Result<SkillDetail> {
        self.get(&format!("/skills/{id}/")).await
    }

    async fn create_skill(&self, draft: &SkillDraft) -> Result<Skill> {
        let draft = draft.validate()?;
        self.write(Method::POST, "/skills/", &draft).await
    }

    async fn update_skill(&self, id: SkillId, draft: &SkillDraft) -> Result<Skill> {
        let draft = draft.validate()?;
        self.write(Method::PUT, &format!("/skills/{id}/"), &draft).await
    }

    async fn delete_skill(&self, id: SkillId) -> Result<()> {
        self.delete(&format!("/skills/{id}/")).await
    }

    async fn skill_recommendations(&self, id: SkillId) -> Result<Vec<ResourceDetail>> {
        self.list(&format!("/skills/{id}/recommend_resources/")).await
    }

    async fn list_resources(&self) -> Result<Vec<ResourceDetail>> {
        self.list("/resources/").await
    }

    async fn get_resource(&self, id: ResourceId) -> Result<ResourceDetail> {
        self.get(&format!("/resources/{id}/")).await
    }

    async fn create_resource(&self, draft: &ResourceDraft) -> Result<ResourceDetail> {
        let draft = draft.validate()?;
        self.write(Method::POST, "/resources/", &draft).await
    }

    async fn update_resource(&self, id: ResourceId, draft: &ResourceDraft) -> Result<ResourceDetail> {
        let draft = draft.validate()?;
        self.write(Method::PUT, &format!("/resources/{id}/"), &draft).await
    }

    async fn delete_resource(&self, id: ResourceId) -> Result<()> {
        self.delete(&format!("/resources/{id}/")).await
    }

    async fn start_learning(&self, id: ResourceId) -> Result<Progress> {
        self.post_empty(&format!("/resources/{id}/start_learning/")).await
    }

    async fn mark_complete(&self, id: ResourceId) -> Result<Progress> {
        self.post_empty(&format!("/resources/{id}/mark_complete/")).await
    }

    async fn resource_recommendations(&self) -> Result<Vec<ResourceDetail>> {
        self.list("/resources/recommend/").await
    }

    async fn list_progress(&self) -> Result<Vec<Progress>> {
        self.list("/progress/").await
    }

    async fn get_progress(&self, id: ProgressId) -> Result<Progress> {
        self.get(&format!("/progress/{id}/")).await
    }

    async fn update_progress(&self, id: ProgressId, update: &ProgressUpdate) -> Result<Progress> {
        let update = update.validate()?;
        self.write(Method::PATCH, &format!("/progress/{id}/"), &update).await
    }

    async fn weekly_summary(&self) -> Result<WeeklySummary> {
        self.get("/progress/weekly_summary/").await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.list("/categories/").await
    }

    async fn get_category(&self, id: CategoryId) -> Result<Category> {
        self.get(&format!("/categories/{id}/")).await
    }

    async fn create_category(&self, draft: &CategoryDraft) -> Result<Category> {
        let draft = draft.validate()?;
        self.write(Method::POST, "/categories/", &draft).await
    }

    async fn update_category(&self, id: CategoryId, draft: &CategoryDraft) -> Result<Category> {
        let draft = draft.validate()?;
        self.write(Method::PUT, &format!("/categories/{id}/"), &draft).await
    }

    async fn delete_category(&self, id: CategoryId) -> Result<()> {
        self.delete(&format!("/categories/{id}/")).await
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.get("/dashboard/stats/").await
    }

    async fn skills_breakdown(&self) -> Result<Vec<SkillBreakdown>> {
        self.list("/dashboard/skills_breakdown/").await
    }

    async fn dashboard_recommendations(&self) -> Result<Recommendations> {
        self.get("/dashboard/recommendations/").await
    }

    async fn list_certifications(&self) -> Result<Vec<Certification>> {
        self.list("/certifications/").await
    }

    async fn get_certification(&self, id: CertificationId) -> Result<Certification> {
        self.get(&format!("/certifications/{id}/")).await
    }

    async fn create_certification(&self, draft: &CertificationDraft) -> Result<Certification> {
        let draft = draft.validate()?;
        self.write(Method::POST, "/certifications/", &draft).await
    }

    async fn update_certification(
        &self,
        id: CertificationId,
        draft: &CertificationDraft,
    ) -> Result<Certification> {
        let draft = draft.validate()?;
        self.write(Method::PUT, &format!("/certifications/{id}/"), &draft).await
    }

    async fn delete_certification(&self, id: CertificationId) -> Result<()> {
        self.delete(&format!("/certifications/{id}/")).await
    }
}
