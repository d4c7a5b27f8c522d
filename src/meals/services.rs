use time::{Date, OffsetDateTime};
use tracing::debug;

use crate::error::Result;
use crate::ids::next_record_id;
use crate::meals::dto::InsertMeal;
use crate::meals::repo_types::Meal;
use crate::store::{LocalStore, UserData};

/// Validate and prepend a meal to the user's aggregate. The record's date is
/// stamped at insert time; the created record is returned so the caller can
/// refresh from it.
pub fn add(store: &LocalStore, user_id: &str, insert: InsertMeal) -> Result<Meal> {
    insert.validate()?;

    let meal = Meal {
        id: next_record_id(),
        user_id: user_id.to_string(),
        kind: insert.kind,
        food: insert.food.trim().to_string(),
        calories: insert.calories,
        protein: insert.protein,
        carbs: insert.carbs,
        fat: insert.fat,
        date: OffsetDateTime::now_utc(),
    };

    let mut data = store.user_data(user_id);
    data.meals.insert(0, meal.clone());
    store.save_user_data(user_id, &data)?;
    debug!(user_id, meal_id = %meal.id, kind = ?meal.kind, "meal added");
    Ok(meal)
}

/// Drop one meal by id and rewrite the aggregate. Returns the saved state so
/// the caller can re-render from it.
pub fn delete(store: &LocalStore, user_id: &str, meal_id: &str) -> Result<UserData> {
    let mut data = store.user_data(user_id);
    data.meals.retain(|m| m.id != meal_id);
    let saved = store.save_user_data(user_id, &data)?;
    debug!(user_id, meal_id, "meal deleted");
    Ok(saved)
}

/// The given day's meals, newest first.
pub fn today(store: &LocalStore, user_id: &str, today: Date) -> Vec<Meal> {
    let mut meals: Vec<Meal> = store
        .user_data(user_id)
        .meals
        .into_iter()
        .filter(|m| m.date.date() == today)
        .collect();
    meals.sort_by(|a, b| b.date.cmp(&a.date));
    meals
}
