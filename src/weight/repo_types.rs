use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One point on the user's weight history, in kilograms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightEntry {
    pub id: String,
    pub user_id: String,
    pub weight: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}
