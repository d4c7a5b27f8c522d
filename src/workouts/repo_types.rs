use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The nine workout categories offered by the log form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Running,
    Cycling,
    Swimming,
    Weightlifting,
    Yoga,
    Cardio,
    Strength,
    Flexibility,
    Sports,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 9] = [
        WorkoutType::Running,
        WorkoutType::Cycling,
        WorkoutType::Swimming,
        WorkoutType::Weightlifting,
        WorkoutType::Yoga,
        WorkoutType::Cardio,
        WorkoutType::Strength,
        WorkoutType::Flexibility,
        WorkoutType::Sports,
    ];

    /// Capitalized display label.
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::Cycling => "Cycling",
            WorkoutType::Swimming => "Swimming",
            WorkoutType::Weightlifting => "Weightlifting",
            WorkoutType::Yoga => "Yoga",
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Strength => "Strength",
            WorkoutType::Flexibility => "Flexibility",
            WorkoutType::Sports => "Sports",
        }
    }
}

/// One logged workout, owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: WorkoutType,
    /// Minutes.
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}
