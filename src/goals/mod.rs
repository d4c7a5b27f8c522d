pub mod dto;
pub mod repo_types;
pub mod services;

pub use dto::InsertGoal;
pub use repo_types::{Goal, GoalKind, GoalPeriod};
