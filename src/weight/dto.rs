use serde::Deserialize;
use time::OffsetDateTime;

use crate::error::{Error, Result};

/// Candidate weight entry; only the id is assigned at insert time, the date
/// is the caller's (entries can be backfilled).
#[derive(Debug, Clone, Deserialize)]
pub struct InsertWeightEntry {
    pub weight: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

impl InsertWeightEntry {
    pub fn validate(&self) -> Result<()> {
        if self.weight <= 0.0 {
            return Err(Error::validation("weight", "Weight must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_weight_passes() {
        let entry = InsertWeightEntry {
            weight: 72.5,
            date: OffsetDateTime::now_utc(),
        };
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn non_positive_weight_is_rejected() {
        let entry = InsertWeightEntry {
            weight: 0.0,
            date: OffsetDateTime::now_utc(),
        };
        let err = entry.validate().unwrap_err();
        assert!(matches!(err, Error::Validation { field: "weight", .. }));
    }
}
