use tracing::debug;

use crate::error::Result;
use crate::ids::next_record_id;
use crate::store::{LocalStore, UserData};
use crate::weight::dto::InsertWeightEntry;
use crate::weight::repo_types::WeightEntry;

/// Validate and append a weight entry to the user's aggregate.
pub fn add(store: &LocalStore, user_id: &str, insert: InsertWeightEntry) -> Result<WeightEntry> {
    insert.validate()?;

    let entry = WeightEntry {
        id: next_record_id(),
        user_id: user_id.to_string(),
        weight: insert.weight,
        date: insert.date,
    };

    let mut data = store.user_data(user_id);
    data.weight_entries.push(entry.clone());
    store.save_user_data(user_id, &data)?;
    debug!(user_id, entry_id = %entry.id, weight = entry.weight, "weight entry added");
    Ok(entry)
}

/// Drop one weight entry by id and rewrite the aggregate. Returns the saved
/// state so the caller can re-render from it.
pub fn delete(store: &LocalStore, user_id: &str, entry_id: &str) -> Result<UserData> {
    let mut data = store.user_data(user_id);
    data.weight_entries.retain(|e| e.id != entry_id);
    let saved = store.save_user_data(user_id, &data)?;
    debug!(user_id, entry_id, "weight entry deleted");
    Ok(saved)
}
