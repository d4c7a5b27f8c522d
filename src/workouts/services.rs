use time::OffsetDateTime;
use tracing::debug;

use crate::error::Result;
use crate::ids::next_record_id;
use crate::store::{LocalStore, UserData};
use crate::workouts::dto::InsertWorkout;
use crate::workouts::repo_types::Workout;

/// Validate and prepend a workout to the user's aggregate. The record's date
/// is stamped at insert time; the created record is returned so the caller
/// can refresh from it.
pub fn add(store: &LocalStore, user_id: &str, insert: InsertWorkout) -> Result<Workout> {
    insert.validate()?;

    let workout = Workout {
        id: next_record_id(),
        user_id: user_id.to_string(),
        kind: insert.kind,
        duration: insert.duration,
        calories: insert.calories,
        notes: insert.notes,
        date: OffsetDateTime::now_utc(),
    };

    let mut data = store.user_data(user_id);
    data.workouts.insert(0, workout.clone());
    store.save_user_data(user_id, &data)?;
    debug!(user_id, workout_id = %workout.id, kind = ?workout.kind, "workout added");
    Ok(workout)
}

/// Drop one workout by id and rewrite the aggregate. Returns the saved state
/// so the caller can re-render from it.
pub fn delete(store: &LocalStore, user_id: &str, workout_id: &str) -> Result<UserData> {
    let mut data = store.user_data(user_id);
    data.workouts.retain(|w| w.id != workout_id);
    let saved = store.save_user_data(user_id, &data)?;
    debug!(user_id, workout_id, "workout deleted");
    Ok(saved)
}

/// All of the user's workouts, newest first.
pub fn list(store: &LocalStore, user_id: &str) -> Vec<Workout> {
    let mut workouts = store.user_data(user_id).workouts;
    workouts.sort_by(|a, b| b.date.cmp(&a.date));
    workouts
}
