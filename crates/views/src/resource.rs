//! Resource detail page and the progress save workflow.

use skillstack_client::SkillStackApi;
use skillstack_core::{ProgressStatus, ProgressUpdate, ResourceDetail, ResourceId};
use tracing::{debug, info};

use crate::state::{fold_error, Loadable, ViewError};

/// Resource detail page state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourceView {
    /// Fetched resource with progress
    pub resource: Loadable<ResourceDetail>,
    /// Whether the progress form is shown
    pub editing: bool,
    /// Progress form values
    pub form: ProgressUpdate,
    /// Last update failure
    pub error: Option<String>,
}

/// Transitions of a [`ResourceView`].
#[derive(Debug, Clone)]
pub enum ResourceAction {
    /// Fetch or refresh succeeded
    Loaded(ResourceDetail),
    /// Fetch failed
    LoadFailed(String),
    /// Show the progress form
    Edit,
    /// Form values changed
    Change(ProgressUpdate),
    /// Hide the form
    Cancel,
    /// Progress saved; carries the refreshed resource
    Saved(ResourceDetail),
    /// Save failed
    SaveFailed(String),
}

impl ResourceView {
    /// Apply one transition.
    pub fn reduce(self, action: ResourceAction) -> Self {
        match action {
            ResourceAction::Loaded(detail) => Self {
                form: ProgressUpdate::from_progress(detail.progress.as_ref()),
                resource: Loadable::Ready(detail),
                ..self
            },
            ResourceAction::LoadFailed(message) => Self {
                resource: Loadable::Failed(message),
                ..self
            },
            ResourceAction::Edit => Self {
                editing: true,
                ..self
            },
            ResourceAction::Change(form) => Self { form, ..self },
            ResourceAction::Cancel => Self {
                editing: false,
                form: ProgressUpdate::from_progress(
                    self.resource.ready().and_then(|d| d.progress.as_ref()),
                ),
                ..self
            },
            ResourceAction::Saved(detail) => Self {
                form: ProgressUpdate::from_progress(detail.progress.as_ref()),
                resource: Loadable::Ready(detail),
                editing: false,
                error: None,
            },
            ResourceAction::SaveFailed(message) => Self {
                error: Some(message),
                ..self
            },
        }
    }
}

/// Fetch a resource for the detail page.
pub async fn load_resource<A>(api: &A, id: ResourceId) -> Result<ResourceView, ViewError>
where
    A: SkillStackApi + ?Sized,
{
    let action = match api.get_resource(id).await {
        Ok(detail) => ResourceAction::Loaded(detail),
        Err(err) => ResourceAction::LoadFailed(fold_error("Failed to fetch resource", err)?),
    };
    Ok(ResourceView::default().reduce(action))
}

/// Save progress for a resource, creating the progress record first if needed.
///
/// With an existing record the update is patched onto it. Without one,
/// `started`/`in_progress` go through `start_learning` and `completed`
/// through `mark_complete`; the resource is then re-fetched and the new
/// record patched. `not_started` with no record sends nothing. Returns the
/// refreshed resource.
pub async fn save_progress<A>(
    api: &A,
    resource_id: ResourceId,
    update: &ProgressUpdate,
) -> Result<ResourceDetail, ViewError>
where
    A: SkillStackApi + ?Sized,
{
    let update = update.validate().map_err(skillstack_client::ApiError::from)?;
    let current = api.get_resource(resource_id).await?;

    let record = match current.progress {
        Some(progress) => Some(progress.id),
        None => {
            let created = match update.status {
                ProgressStatus::Started | ProgressStatus::InProgress => {
                    Some(api.start_learning(resource_id).await?)
                }
                ProgressStatus::Completed => Some(api.mark_complete(resource_id).await?),
                ProgressStatus::NotStarted => None,
            };
            match created {
                Some(_) => api.get_resource(resource_id).await?.progress.map(|p| p.id),
                None => None,
            }
        }
    };

    match record {
        Some(id) => {
            api.update_progress(id, &update).await?;
            info!(resource = %resource_id, status = update.status.as_str(), "progress saved");
        }
        None => debug!(resource = %resource_id, "no progress record to update"),
    }

    Ok(api.get_resource(resource_id).await?)
}

/// Submit the progress form and fold the outcome into the page.
pub async fn submit_progress<A>(api: &A, view: ResourceView) -> Result<ResourceView, ViewError>
where
    A: SkillStackApi + ?Sized,
{
    let Some(id) = view.resource.ready().map(|d| d.resource.id) else {
        return Ok(view);
    };

    let action = match save_progress(api, id, &view.form).await {
        Ok(detail) => ResourceAction::Saved(detail),
        Err(ViewError::Api(err)) => {
            ResourceAction::SaveFailed(fold_error("Failed to update resource", err)?)
        }
        Err(err) => return Err(err),
    };
    Ok(view.reduce(action))
}
