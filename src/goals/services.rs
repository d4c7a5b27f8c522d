use tracing::debug;

use crate::error::{Error, Result};
use crate::goals::dto::InsertGoal;
use crate::goals::repo_types::Goal;
use crate::ids::next_record_id;
use crate::store::{LocalStore, UserData};

/// Validate and append a goal to the user's aggregate; progress starts at
/// zero.
pub fn add(store: &LocalStore, user_id: &str, insert: InsertGoal) -> Result<Goal> {
    insert.validate()?;

    let goal = Goal {
        id: next_record_id(),
        user_id: user_id.to_string(),
        kind: insert.kind,
        target: insert.target,
        current: 0.0,
        period: insert.period,
        start_date: insert.start_date,
        end_date: insert.end_date,
    };

    let mut data = store.user_data(user_id);
    data.goals.push(goal.clone());
    store.save_user_data(user_id, &data)?;
    debug!(user_id, goal_id = %goal.id, kind = ?goal.kind, "goal added");
    Ok(goal)
}

/// Move a goal's progress marker and rewrite the aggregate.
pub fn set_progress(store: &LocalStore, user_id: &str, goal_id: &str, current: f64) -> Result<Goal> {
    if current < 0.0 {
        return Err(Error::validation("current", "Progress must not be negative"));
    }

    let mut data = store.user_data(user_id);
    let Some(goal) = data.goals.iter_mut().find(|g| g.id == goal_id) else {
        return Err(Error::NotFound(format!("goal {goal_id} not found")));
    };
    goal.current = current;
    let updated = goal.clone();
    store.save_user_data(user_id, &data)?;
    debug!(user_id, goal_id, current, "goal progress updated");
    Ok(updated)
}

/// Drop one goal by id and rewrite the aggregate. Returns the saved state so
/// the caller can re-render from it.
pub fn delete(store: &LocalStore, user_id: &str, goal_id: &str) -> Result<UserData> {
    let mut data = store.user_data(user_id);
    data.goals.retain(|g| g.id != goal_id);
    let saved = store.save_user_data(user_id, &data)?;
    debug!(user_id, goal_id, "goal deleted");
    Ok(saved)
}
