//! Progress Tracking
//!
//! Per-skill progress aggregation, status badges and mastery date
//! prediction for the dashboard.

#![warn(missing_docs)]

pub mod clock;
pub mod dashboard;
pub mod mastery;
pub mod status;
pub mod tracker;

pub use clock::Clock;
pub use dashboard::{build_rows, snapshot_of, DashboardRow};
pub use mastery::{
    estimated_days, predict, MasteryPrediction, MasteryPredictor, SkillProgressSnapshot,
    DEFAULT_DATE_FORMAT,
};
pub use status::SkillStatus;
pub use tracker::{breakdown_for, breakdown_table, StatusTally};
