//! Per-skill progress aggregation.
//!
//! Rebuilds the skills breakdown from resource detail records, counting
//! each resource by the status of its progress record. Used when the
//! client already holds the resource list and to cross-check the
//! server-side aggregate.

use skillstack_core::{share_of, ProgressStatus, ResourceDetail, Skill, SkillBreakdown, SkillId};
use std::collections::BTreeMap;

/// Status counters for one skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusTally {
    /// All attached resources
    pub total: u64,
    /// Status `started`
    pub started: u64,
    /// Status `in_progress`
    pub in_progress: u64,
    /// Status `completed`
    pub completed: u64,
}

impl StatusTally {
    /// Count one resource.
    pub fn record(&mut self, status: ProgressStatus) {
        self.total += 1;
        match status {
            ProgressStatus::NotStarted => {}
            ProgressStatus::Started => self.started += 1,
            ProgressStatus::InProgress => self.in_progress += 1,
            ProgressStatus::Completed => self.completed += 1,
        }
    }

    /// Started, in-progress and completed resources.
    pub fn active(&self) -> u64 {
        self.started + self.in_progress + self.completed
    }

    /// Percentage completed; zero for a skill with no resources.
    pub fn completion_rate(&self) -> f64 {
        share_of(self.completed, self.total)
    }

    /// Percentage active; zero for a skill with no resources.
    pub fn activity_rate(&self) -> f64 {
        share_of(self.active(), self.total)
    }
}

/// Build one breakdown row for `skill` from its resources.
pub fn breakdown_for<'a>(
    id: SkillId,
    name: &str,
    resources: impl IntoIterator<Item = &'a ResourceDetail>,
) -> SkillBreakdown {
    let mut tally = StatusTally::default();
    for resource in resources {
        tally.record(resource.status());
    }
    into_breakdown(id, name.to_string(), tally)
}

/// Build the breakdown table for all `skills`, in the order given.
///
/// Resources pointing at a skill not in `skills` are ignored.
pub fn breakdown_table(skills: &[Skill], resources: &[ResourceDetail]) -> Vec<SkillBreakdown> {
    let mut tallies: BTreeMap<SkillId, StatusTally> =
        skills.iter().map(|s| (s.id, StatusTally::default())).collect();

    for resource in resources {
        if let Some(tally) = tallies.get_mut(&resource.resource.skill) {
            tally.record(resource.status());
        }
    }

    skills
        .iter()
        .map(|skill| {
            let tally = tallies.get(&skill.id).copied().unwrap_or_default();
            into_breakdown(skill.id, skill.name.clone(), tally)
        })
        .collect()
}

fn into_breakdown(id: SkillId, name: String, tally: StatusTally) -> SkillBreakdown {
    SkillBreakdown {
        id,
        name,
        resource_count: tally.total,
        started_count: tally.started,
        in_progress_count: tally.in_progress,
        completed_count: tally.completed,
        active_count: tally.active(),
        completion_rate: tally.completion_rate(),
        activity_rate: tally.activity_rate(),
    }
}
