//! Skill recommendations page.

use skillstack_client::SkillStackApi;
use skillstack_core::{ResourceDetail, SkillDetail, SkillId};

use crate::state::{fold_error, Loadable, ViewError};

/// A skill and the resources recommended for it.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillRecommendations {
    /// The skill
    pub skill: SkillDetail,
    /// Untouched resources worth starting next
    pub resources: Vec<ResourceDetail>,
}

/// Fetch a skill and its recommendations concurrently.
pub async fn load_skill_recommendations<A>(
    api: &A,
    skill_id: SkillId,
) -> Result<Loadable<SkillRecommendations>, ViewError>
where
    A: SkillStackApi + ?Sized,
{
    let fetched = tokio::try_join!(api.get_skill(skill_id), api.skill_recommendations(skill_id));
    Ok(match fetched {
        Ok((skill, resources)) => Loadable::Ready(SkillRecommendations { skill, resources }),
        Err(err) => Loadable::Failed(fold_error("Failed to fetch recommendations", err)?),
    })
}
