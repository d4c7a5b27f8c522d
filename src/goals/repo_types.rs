use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The metric a goal tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    Weight,
    Steps,
    Calories,
    Workouts,
}

impl GoalKind {
    pub fn label(&self) -> &'static str {
        match self {
            GoalKind::Weight => "Weight",
            GoalKind::Steps => "Steps",
            GoalKind::Calories => "Calories",
            GoalKind::Workouts => "Workouts",
        }
    }
}

/// How often the goal resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPeriod {
    Daily,
    Weekly,
    Monthly,
}

/// A target the user works toward. `current` moves via progress updates and
/// starts at zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: GoalKind,
    pub target: f64,
    pub current: f64,
    pub period: GoalPeriod,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_date: OffsetDateTime,
}
