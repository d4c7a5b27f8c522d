use serde::Serialize;
use time::macros::format_description;
use time::{Date, Duration, Weekday};

use crate::store::UserData;
use crate::summary::activity_source::ActivitySource;

/// Today's headline numbers.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub steps: u32,
    pub calories_burned: u32,
    pub workout_minutes: u32,
    pub water_liters: f64,
}

/// A recent workout, ready for the activity feed.
#[derive(Debug, Clone, Serialize)]
pub struct RecentActivity {
    pub name: String,
    pub details: String,
    pub logged: String,
}

/// One goal's standing. `percentage` is round(current/target*100) with no
/// upper clamp; overshooting a goal reads as more than 100.
#[derive(Debug, Clone, Serialize)]
pub struct GoalProgress {
    pub name: String,
    pub current: f64,
    pub target: f64,
    pub percentage: i32,
}

/// Calories burned on one day of the trailing week.
#[derive(Debug, Clone, Serialize)]
pub struct DayCalories {
    pub day: &'static str,
    pub calories: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub stats: DashboardStats,
    pub recent_activities: Vec<RecentActivity>,
    pub goal_progress: Vec<GoalProgress>,
    pub weekly_activity: Vec<DayCalories>,
}

const WEEKLY_WORKOUT_TARGET: f64 = 5.0;
const DAILY_STEP_TARGET: f64 = 10_000.0;

/// Reduce a user's collections to the dashboard view. Pure: the caller
/// supplies "today" and the instrumentation source.
pub fn dashboard(today: Date, data: &UserData, activity: &dyn ActivitySource) -> DashboardSummary {
    let todays: Vec<_> = data
        .workouts
        .iter()
        .filter(|w| w.date.date() == today)
        .collect();
    let calories_burned = todays.iter().map(|w| w.calories.unwrap_or(0)).sum();
    let workout_minutes = todays.iter().map(|w| w.duration).sum();

    let stats = DashboardStats {
        steps: activity.steps_today(),
        calories_burned,
        workout_minutes,
        water_liters: activity.water_today_liters(),
    };

    let recent_activities = data
        .workouts
        .iter()
        .take(3)
        .map(|w| RecentActivity {
            name: w.kind.label().to_string(),
            details: format!("{} min • {} cal", w.duration, w.calories.unwrap_or(0)),
            logged: days_ago_label(today, w.date.date()),
        })
        .collect();

    let goal_progress = if data.goals.is_empty() {
        built_in_goals(today, data, activity)
    } else {
        data.goals
            .iter()
            .map(|g| GoalProgress {
                name: g.kind.label().to_string(),
                current: g.current,
                target: g.target,
                percentage: percent(g.current, g.target),
            })
            .collect()
    };

    DashboardSummary {
        stats,
        recent_activities,
        goal_progress,
        weekly_activity: weekly_activity(today, data),
    }
}

/// Uncapped goal percentage; a zero target reads as no progress.
fn percent(current: f64, target: f64) -> i32 {
    if target == 0.0 {
        return 0;
    }
    (current / target * 100.0).round() as i32
}

/// Until the user defines goals of their own, show workouts-this-week and
/// today's steps against fixed targets.
fn built_in_goals(today: Date, data: &UserData, activity: &dyn ActivitySource) -> Vec<GoalProgress> {
    let cutoff = today - Duration::days(7);
    let this_week = data
        .workouts
        .iter()
        .filter(|w| w.date.date() > cutoff && w.date.date() <= today)
        .count() as f64;
    let steps = activity.steps_today() as f64;

    vec![
        GoalProgress {
            name: "Weekly Workouts".to_string(),
            current: this_week,
            target: WEEKLY_WORKOUT_TARGET,
            percentage: percent(this_week, WEEKLY_WORKOUT_TARGET),
        },
        GoalProgress {
            name: "Daily Steps".to_string(),
            current: steps,
            target: DAILY_STEP_TARGET,
            percentage: percent(steps, DAILY_STEP_TARGET),
        },
    ]
}

/// Calories burned per day over the trailing seven calendar days, oldest
/// first, today last.
fn weekly_activity(today: Date, data: &UserData) -> Vec<DayCalories> {
    (0..7)
        .rev()
        .map(|offset| {
            let day = today - Duration::days(offset);
            let calories = data
                .workouts
                .iter()
                .filter(|w| w.date.date() == day)
                .map(|w| w.calories.unwrap_or(0))
                .sum();
            DayCalories {
                day: weekday_label(day.weekday()),
                calories,
            }
        })
        .collect()
}

fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}

fn days_ago_label(today: Date, day: Date) -> String {
    match (today - day).whole_days() {
        d if d <= 0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        d @ 2..=6 => format!("{d} days ago"),
        _ => day
            .format(format_description!(
                "[month repr:short] [day padding:none], [year]"
            ))
            .unwrap_or_else(|_| day.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::repo_types::{Goal, GoalKind, GoalPeriod};
    use crate::summary::activity_source::SimulatedActivitySource;
    use crate::workouts::repo_types::{Workout, WorkoutType};
    use time::macros::datetime;

    fn workout(id: &str, kind: WorkoutType, date: time::OffsetDateTime, calories: Option<u32>, minutes: u32) -> Workout {
        Workout {
            id: id.to_string(),
            user_id: "u1".to_string(),
            kind,
            duration: minutes,
            calories,
            notes: None,
            date,
        }
    }

    fn goal(id: &str, current: f64, target: f64) -> Goal {
        let start = datetime!(2024-06-01 00:00 UTC);
        Goal {
            id: id.to_string(),
            user_id: "u1".to_string(),
            kind: GoalKind::Workouts,
            target,
            current,
            period: GoalPeriod::Weekly,
            start_date: start,
            end_date: start + Duration::days(7),
        }
    }

    #[test]
    fn todays_calories_and_minutes_are_summed() {
        let today = datetime!(2024-06-15 00:00 UTC).date();
        let mut data = UserData::default();
        data.workouts.push(workout("1", WorkoutType::Running, datetime!(2024-06-15 08:00 UTC), Some(300), 30));
        data.workouts.push(workout("2", WorkoutType::Yoga, datetime!(2024-06-15 18:00 UTC), None, 45));
        data.workouts.push(workout("3", WorkoutType::Cycling, datetime!(2024-06-14 08:00 UTC), Some(500), 60));

        let summary = dashboard(today, &data, &SimulatedActivitySource);
        assert_eq!(summary.stats.calories_burned, 300, "missing calories count as zero");
        assert_eq!(summary.stats.workout_minutes, 75);
        assert_eq!(summary.stats.steps, 8_247);
    }

    #[test]
    fn recent_activities_cap_at_three_and_humanize_dates() {
        let today = datetime!(2024-06-15 00:00 UTC).date();
        let mut data = UserData::default();
        for (i, day) in [15u8, 14, 12, 10].iter().enumerate() {
            data.workouts.push(workout(
                &i.to_string(),
                WorkoutType::Running,
                datetime!(2024-06-01 08:00 UTC).replace_day(*day).expect("day"),
                Some(100),
                20,
            ));
        }

        let summary = dashboard(today, &data, &SimulatedActivitySource);
        assert_eq!(summary.recent_activities.len(), 3);
        assert_eq!(summary.recent_activities[0].logged, "Today");
        assert_eq!(summary.recent_activities[1].logged, "Yesterday");
        assert_eq!(summary.recent_activities[2].logged, "3 days ago");
        assert_eq!(summary.recent_activities[0].details, "20 min • 100 cal");
    }

    #[test]
    fn stored_goals_take_over_from_built_ins() {
        let today = datetime!(2024-06-15 00:00 UTC).date();
        let mut data = UserData::default();
        data.goals.push(goal("g1", 3.0, 5.0));

        let summary = dashboard(today, &data, &SimulatedActivitySource);
        assert_eq!(summary.goal_progress.len(), 1);
        assert_eq!(summary.goal_progress[0].percentage, 60);
    }

    #[test]
    fn goal_percentage_is_uncapped() {
        let today = datetime!(2024-06-15 00:00 UTC).date();
        let mut data = UserData::default();
        data.goals.push(goal("g1", 12.0, 5.0));

        let summary = dashboard(today, &data, &SimulatedActivitySource);
        assert_eq!(summary.goal_progress[0].percentage, 240);
    }

    #[test]
    fn built_in_goals_count_the_trailing_week() {
        let today = datetime!(2024-06-15 00:00 UTC).date();
        let mut data = UserData::default();
        data.workouts.push(workout("1", WorkoutType::Running, datetime!(2024-06-15 08:00 UTC), Some(100), 20));
        data.workouts.push(workout("2", WorkoutType::Running, datetime!(2024-06-10 08:00 UTC), Some(100), 20));
        // Eight days back, outside the window.
        data.workouts.push(workout("3", WorkoutType::Running, datetime!(2024-06-07 08:00 UTC), Some(100), 20));

        let summary = dashboard(today, &data, &SimulatedActivitySource);
        let weekly = summary
            .goal_progress
            .iter()
            .find(|g| g.name == "Weekly Workouts")
            .expect("built-in goal");
        assert_eq!(weekly.current, 2.0);
        assert_eq!(weekly.percentage, 40);
    }

    #[test]
    fn weekly_activity_spans_seven_days_ending_today() {
        let today = datetime!(2024-06-15 00:00 UTC).date(); // a Saturday
        let mut data = UserData::default();
        data.workouts.push(workout("1", WorkoutType::Running, datetime!(2024-06-15 08:00 UTC), Some(250), 20));
        data.workouts.push(workout("2", WorkoutType::Cycling, datetime!(2024-06-13 08:00 UTC), Some(400), 40));

        let summary = dashboard(today, &data, &SimulatedActivitySource);
        assert_eq!(summary.weekly_activity.len(), 7);
        assert_eq!(summary.weekly_activity[0].day, "Sun");
        assert_eq!(summary.weekly_activity[6].day, "Sat");
        assert_eq!(summary.weekly_activity[6].calories, 250);
        assert_eq!(summary.weekly_activity[4].day, "Thu");
        assert_eq!(summary.weekly_activity[4].calories, 400);
        assert_eq!(summary.weekly_activity[5].calories, 0);
    }
}
