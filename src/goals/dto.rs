use serde::Deserialize;
use time::OffsetDateTime;

use crate::error::{Error, Result};
use crate::goals::repo_types::{GoalKind, GoalPeriod};

/// Candidate goal; id is assigned at insert time and progress starts at zero.
#[derive(Debug, Clone, Deserialize)]
pub struct InsertGoal {
    #[serde(rename = "type")]
    pub kind: GoalKind,
    pub target: f64,
    pub period: GoalPeriod,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_date: OffsetDateTime,
}

impl InsertGoal {
    pub fn validate(&self) -> Result<()> {
        if self.target <= 0.0 {
            return Err(Error::validation("target", "Target must be positive"));
        }
        if self.end_date < self.start_date {
            return Err(Error::validation(
                "endDate",
                "End date must not precede the start date",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal() -> InsertGoal {
        let start = OffsetDateTime::now_utc();
        InsertGoal {
            kind: GoalKind::Workouts,
            target: 5.0,
            period: GoalPeriod::Weekly,
            start_date: start,
            end_date: start + time::Duration::days(7),
        }
    }

    #[test]
    fn valid_goal_passes() {
        assert!(goal().validate().is_ok());
    }

    #[test]
    fn zero_target_is_rejected() {
        let mut g = goal();
        g.target = 0.0;
        let err = g.validate().unwrap_err();
        assert!(matches!(err, Error::Validation { field: "target", .. }));
    }

    #[test]
    fn inverted_date_range_is_rejected() {
        let mut g = goal();
        g.end_date = g.start_date - time::Duration::days(1);
        let err = g.validate().unwrap_err();
        assert!(matches!(err, Error::Validation { field: "endDate", .. }));
    }
}
