//! CRUD list pages: skills, resources, categories, certifications.

use skillstack_client::SkillStackApi;
use tracing::debug;

use crate::records::Record;
use crate::state::{fold_error, Loadable, ViewError};

/// Create/edit form state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Form<I, D> {
    /// Form hidden
    #[default]
    Closed,
    /// Adding a new record
    Creating(D),
    /// Editing an existing record
    Editing {
        /// Record being edited
        id: I,
        /// Current form values
        draft: D,
    },
}

impl<I, D> Form<I, D> {
    /// Whether the form is shown.
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Current form values.
    pub fn draft(&self) -> Option<&D> {
        match self {
            Self::Closed => None,
            Self::Creating(draft) | Self::Editing { draft, .. } => Some(draft),
        }
    }
}

/// State of one CRUD list page.
#[derive(Debug, Clone)]
pub struct ListView<R: Record> {
    /// Fetched records
    pub items: Loadable<Vec<R>>,

    /// Form state
    pub form: Form<R::Id, R::Draft>,

    /// Last save or delete failure
    pub error: Option<String>,
}

impl<R: Record> Default for ListView<R> {
    fn default() -> Self {
        Self {
            items: Loadable::Loading,
            form: Form::Closed,
            error: None,
        }
    }
}

/// Transitions of a [`ListView`].
#[derive(Debug, Clone)]
pub enum ListAction<R: Record> {
    /// Fetch succeeded
    Loaded(Vec<R>),
    /// Fetch failed
    LoadFailed(String),
    /// Open an empty form
    OpenCreate,
    /// Open the form pre-filled from a record
    Edit(R),
    /// Form values changed
    Change(R::Draft),
    /// Close the form
    Cancel,
    /// Create or update succeeded
    Saved,
    /// Create or update failed
    SaveFailed(String),
    /// Delete succeeded
    Deleted(R::Id),
    /// Delete failed
    DeleteFailed(String),
}

impl<R: Record> ListView<R> {
    /// Apply one transition.
    pub fn reduce(self, action: ListAction<R>) -> Self {
        match action {
            ListAction::Loaded(items) => Self {
                items: Loadable::Ready(items),
                error: None,
                ..self
            },
            ListAction::LoadFailed(message) => Self {
                items: Loadable::Failed(message),
                ..self
            },
            ListAction::OpenCreate => Self {
                form: Form::Creating(R::Draft::default()),
                error: None,
                ..self
            },
            ListAction::Edit(record) => Self {
                form: Form::Editing {
                    id: record.id(),
                    draft: record.to_draft(),
                },
                error: None,
                ..self
            },
            ListAction::Change(draft) => {
                let form = match self.form {
                    Form::Closed => Form::Closed,
                    Form::Creating(_) => Form::Creating(draft),
                    Form::Editing { id, .. } => Form::Editing { id, draft },
                };
                Self { form, ..self }
            }
            ListAction::Cancel | ListAction::Saved => Self {
                form: Form::Closed,
                error: None,
                ..self
            },
            ListAction::SaveFailed(message) | ListAction::DeleteFailed(message) => Self {
                error: Some(message),
                ..self
            },
            ListAction::Deleted(id) => {
                let items = match self.items {
                    Loadable::Ready(mut items) => {
                        items.retain(|item| item.id() != id);
                        Loadable::Ready(items)
                    }
                    other => other,
                };
                Self {
                    items,
                    error: None,
                    ..self
                }
            }
        }
    }
}

/// Fetch the records for a page.
pub async fn refresh<R, A>(api: &A, view: ListView<R>) -> Result<ListView<R>, ViewError>
where
    R: Record,
    A: SkillStackApi + ?Sized,
{
    let action = match R::fetch_all(api).await {
        Ok(items) => {
            debug!(kind = R::PLURAL, count = items.len(), "fetched");
            ListAction::Loaded(items)
        }
        Err(err) => ListAction::LoadFailed(fold_error(&format!("Failed to fetch {}", R::PLURAL), err)?),
    };
    Ok(view.reduce(action))
}

/// Submit the open form, then re-fetch on success.
///
/// A closed form is left untouched.
pub async fn submit<R, A>(api: &A, view: ListView<R>) -> Result<ListView<R>, ViewError>
where
    R: Record,
    A: SkillStackApi + ?Sized,
{
    if !view.form.is_open() {
        return Ok(view);
    }

    let result = match &view.form {
        Form::Closed => Ok(()),
        Form::Creating(draft) => R::create(api, draft).await,
        Form::Editing { id, draft } => R::update(api, *id, draft).await,
    };

    match result {
        Ok(()) => refresh(api, view.reduce(ListAction::Saved)).await,
        Err(err) => {
            let message = fold_error(&format!("Failed to save {}", R::NOUN), err)?;
            Ok(view.reduce(ListAction::SaveFailed(message)))
        }
    }
}

/// Delete a record, then re-fetch on success.
pub async fn remove<R, A>(api: &A, view: ListView<R>, id: R::Id) -> Result<ListView<R>, ViewError>
where
    R: Record,
    A: SkillStackApi + ?Sized,
{
    match R::delete(api, id).await {
        Ok(()) => refresh(api, view.reduce(ListAction::Deleted(id))).await,
        Err(err) => {
            let message = fold_error(&format!("Failed to delete {}", R::NOUN), err)?;
            Ok(view.reduce(ListAction::DeleteFailed(message)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeApi;
    use skillstack_core::{Category, CategoryDraft, Skill, SkillDraft, SkillId};

    async fn loaded(api: &FakeApi) -> ListView<Skill> {
        refresh(api, ListView::default()).await.unwrap()
    }

    #[tokio::test]
    async fn test_refresh_loads_items() {
        let api = FakeApi::seeded();
        let view = loaded(&api).await;
        assert_eq!(view.items.ready().unwrap().len(), 2);
        assert!(view.error.is_none());
    }

    #[tokio::test]
    async fn test_create_flow() {
        let api = FakeApi::seeded();
        let view = loaded(&api).await.reduce(ListAction::OpenCreate);
        assert_eq!(view.form, Form::Creating(SkillDraft::default()));

        let view = view.reduce(ListAction::Change(SkillDraft::new("Go")));
        let view = submit(&api, view).await.unwrap();

        assert!(!view.form.is_open());
        let names: Vec<_> = view.items.ready().unwrap().iter().map(|s| s.name.clone()).collect();
        assert!(names.contains(&"Go".to_string()));
    }

    #[tokio::test]
    async fn test_edit_prefills_and_updates() {
        let api = FakeApi::seeded();
        let view = loaded(&api).await;
        let first = view.items.ready().unwrap()[0].clone();
        let view = view.reduce(ListAction::Edit(first.clone()));
        assert_eq!(view.form.draft(), Some(&SkillDraft::from_skill(&first)));

        let mut draft = SkillDraft::from_skill(&first);
        draft.name = "Renamed".into();
        let view = submit(&api, view.reduce(ListAction::Change(draft))).await.unwrap();
        assert_eq!(view.items.ready().unwrap()[0].name, "Renamed");
    }

    #[tokio::test]
    async fn test_invalid_draft_keeps_form_open() {
        let api = FakeApi::seeded();
        let view = loaded(&api).await.reduce(ListAction::OpenCreate);
        let view = submit(&api, view).await.unwrap();

        assert!(view.form.is_open());
        let error = view.error.unwrap();
        assert!(error.starts_with("Failed to save skill: "), "{error}");
    }

    #[tokio::test]
    async fn test_delete_and_failures() {
        let api = FakeApi::seeded();
        let view = loaded(&api).await;
        let view = remove(&api, view, SkillId::new(1)).await.unwrap();
        assert_eq!(view.items.ready().unwrap().len(), 1);

        let view = remove(&api, view, SkillId::new(99)).await.unwrap();
        assert!(view.error.unwrap().starts_with("Failed to delete skill: "));
    }

    #[tokio::test]
    async fn test_unauthorized_escapes() {
        let api = FakeApi::seeded();
        api.sign_out();
        let err = refresh::<Category, _>(&api, ListView::default()).await.unwrap_err();
        assert!(matches!(err, ViewError::Unauthorized { .. }));
    }

    #[test]
    fn test_cancel_resets_form_and_error() {
        let view: ListView<Category> = ListView {
            items: Loadable::Ready(vec![]),
            form: Form::Creating(CategoryDraft::default()),
            error: Some("boom".into()),
        };
        let view = view.reduce(ListAction::Cancel);
        assert_eq!(view.form, Form::Closed);
        assert!(view.error.is_none());
    }

    #[test]
    fn test_change_on_closed_form_is_ignored() {
        let view: ListView<Category> = ListView::default();
        let view = view.reduce(ListAction::Change(CategoryDraft::default()));
        assert_eq!(view.form, Form::Closed);
    }
}
