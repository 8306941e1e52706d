//! SkillStack page state and controllers.
//!
//! Each page is an immutable state value with a `reduce` transition
//! function. Controllers run the API calls a page needs and reduce the
//! outcome; only an expired session escapes as an error.

#![warn(missing_docs)]

pub mod dashboard;
pub mod list;
pub mod recommend;
pub mod records;
pub mod resource;
pub mod state;

#[cfg(test)]
mod fake;

pub use dashboard::{
    generate_weekly_summary, load_dashboard, DashboardAction, DashboardData, DashboardState,
    NO_SUMMARY_YET,
};
pub use list::{refresh, remove, submit, Form, ListAction, ListView};
pub use recommend::{load_skill_recommendations, SkillRecommendations};
pub use records::Record;
pub use resource::{load_resource, save_progress, submit_progress, ResourceAction, ResourceView};
pub use state::{Loadable, ViewError};
