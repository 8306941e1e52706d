//! Dashboard page: stats cards, skills table with predictions, weekly summary.

use chrono::NaiveDate;
use skillstack_client::SkillStackApi;
use skillstack_core::{DashboardStats, Recommendations, SkillBreakdown, WeeklySummary};
use skillstack_progress::{build_rows, Clock, DashboardRow};
use tracing::{debug, info};

use crate::state::{fold_error, Loadable, ViewError};

/// Placeholder shown before a summary has been generated.
pub const NO_SUMMARY_YET: &str =
    "No summary available. Click 'Generate Weekly Summary' to create one.";

/// Everything the dashboard renders once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    /// Aggregate counters
    pub stats: DashboardStats,
    /// Skills table
    pub rows: Vec<DashboardRow>,
    /// Recommended skills and resources
    pub recommendations: Recommendations,
    /// Date predictions are counted from
    pub reference_date: NaiveDate,
}

/// Dashboard page state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    /// Fetched data
    pub data: Loadable<DashboardData>,
    /// Weekly summary panel text, once generated or failed
    pub weekly_summary: Option<String>,
}

/// Transitions of a [`DashboardState`].
#[derive(Debug, Clone)]
pub enum DashboardAction {
    /// All three dashboard requests succeeded
    Loaded {
        /// Aggregate counters
        stats: DashboardStats,
        /// Raw per-skill rows
        breakdown: Vec<SkillBreakdown>,
        /// Recommendations
        recommendations: Recommendations,
        /// Date predictions are counted from
        reference_date: NaiveDate,
    },
    /// Any dashboard request failed
    LoadFailed(String),
    /// Summary generated
    SummaryGenerated(WeeklySummary),
    /// Summary request failed
    SummaryFailed(String),
}

impl DashboardState {
    /// Apply one transition.
    pub fn reduce(self, action: DashboardAction) -> Self {
        match action {
            DashboardAction::Loaded {
                stats,
                breakdown,
                recommendations,
                reference_date,
            } => Self {
                data: Loadable::Ready(DashboardData {
                    rows: build_rows(&breakdown, reference_date),
                    stats,
                    recommendations,
                    reference_date,
                }),
                ..self
            },
            DashboardAction::LoadFailed(message) => Self {
                data: Loadable::Failed(message),
                ..self
            },
            DashboardAction::SummaryGenerated(summary) => Self {
                weekly_summary: Some(summary.display_text().to_string()),
                ..self
            },
            DashboardAction::SummaryFailed(message) => Self {
                weekly_summary: Some(message),
                ..self
            },
        }
    }

    /// Text for the weekly summary panel.
    pub fn summary_text(&self) -> &str {
        self.weekly_summary.as_deref().unwrap_or(NO_SUMMARY_YET)
    }
}

/// Fetch stats, breakdown and recommendations concurrently.
///
/// Predictions are counted from `clock.today()`.
pub async fn load_dashboard<A>(api: &A, clock: &Clock) -> Result<DashboardState, ViewError>
where
    A: SkillStackApi + ?Sized,
{
    let fetched = tokio::try_join!(
        api.dashboard_stats(),
        api.skills_breakdown(),
        api.dashboard_recommendations(),
    );

    let action = match fetched {
        Ok((stats, breakdown, recommendations)) => {
            debug!(skills = breakdown.len(), "dashboard loaded");
            DashboardAction::Loaded {
                stats,
                breakdown,
                recommendations,
                reference_date: clock.today(),
            }
        }
        Err(err) => DashboardAction::LoadFailed(fold_error("Failed to fetch dashboard data", err)?),
    };

    Ok(DashboardState::default().reduce(action))
}

/// Request the weekly summary and show it in the panel.
pub async fn generate_weekly_summary<A>(
    api: &A,
    state: DashboardState,
) -> Result<DashboardState, ViewError>
where
    A: SkillStackApi + ?Sized,
{
    let action = match api.weekly_summary().await {
        Ok(summary) => {
            info!("weekly summary generated");
            DashboardAction::SummaryGenerated(summary)
        }
        Err(err) => DashboardAction::SummaryFailed(fold_error("Failed to generate summary", err)?),
    };
    Ok(state.reduce(action))
}
