use serde::Deserialize;

use crate::error::{Error, Result};
use crate::workouts::repo_types::WorkoutType;

/// Candidate workout; id, owner and date are assigned at insert time.
#[derive(Debug, Clone, Deserialize)]
pub struct InsertWorkout {
    #[serde(rename = "type")]
    pub kind: WorkoutType,
    /// Minutes.
    pub duration: u32,
    #[serde(default)]
    pub calories: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl InsertWorkout {
    pub fn validate(&self) -> Result<()> {
        if self.duration < 1 {
            return Err(Error::validation(
                "duration",
                "Duration must be at least 1 minute",
            ));
        }
        Ok(())
    }
}
