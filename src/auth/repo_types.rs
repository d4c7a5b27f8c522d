use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// What the user is training toward. Optional on the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    MaintainWeight,
    ImproveEndurance,
}

/// User record as kept in the users collection. The password is stored as an
/// Argon2 hash, never as plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Centimeters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Kilograms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<FitnessGoal>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
