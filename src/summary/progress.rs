use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use time::macros::format_description;

use crate::store::UserData;
use crate::workouts::repo_types::WorkoutType;

/// How often one workout category shows up in the log.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutTypeCount {
    pub kind: WorkoutType,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub achieved: bool,
}

/// One point on the weight chart.
#[derive(Debug, Clone, Serialize)]
pub struct WeightPoint {
    pub label: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressSummary {
    /// Busiest category first.
    pub workout_distribution: Vec<WorkoutTypeCount>,
    pub achievements: Vec<Achievement>,
    /// Oldest entry first.
    pub weight_series: Vec<WeightPoint>,
}

/// Reduce a user's collections to the progress view.
pub fn progress(data: &UserData) -> ProgressSummary {
    let mut counts: BTreeMap<WorkoutType, u32> = BTreeMap::new();
    for workout in &data.workouts {
        *counts.entry(workout.kind).or_insert(0) += 1;
    }
    let mut workout_distribution: Vec<WorkoutTypeCount> = counts
        .into_iter()
        .map(|(kind, count)| WorkoutTypeCount { kind, count })
        .collect();
    workout_distribution.sort_by(|a, b| b.count.cmp(&a.count));

    let total_workouts = data.workouts.len();
    let distinct_days: HashSet<_> = data.workouts.iter().map(|w| w.date.date()).collect();

    let achievements = vec![
        Achievement {
            title: "First Workout",
            description: "Completed your first workout",
            achieved: total_workouts >= 1,
        },
        Achievement {
            title: "Consistency King",
            description: "Complete 20 workouts",
            achieved: total_workouts >= 20,
        },
        Achievement {
            title: "7-Day Streak",
            description: "Worked out on 7 different days",
            achieved: distinct_days.len() >= 7,
        },
    ];

    let mut entries = data.weight_entries.clone();
    entries.sort_by(|a, b| a.date.cmp(&b.date));
    let label_format = format_description!("[month repr:short] [day padding:none]");
    let weight_series = entries
        .into_iter()
        .map(|entry| WeightPoint {
            label: entry
                .date
                .date()
                .format(label_format)
                .unwrap_or_else(|_| entry.date.date().to_string()),
            weight: entry.weight,
        })
        .collect();

    ProgressSummary {
        workout_distribution,
        achievements,
        weight_series,
    }
}
