mod backend;

pub use backend::{FsBackend, MemoryBackend, StorageBackend};

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::warn;

use crate::auth::repo_types::User;
use crate::error::{Error, Result};
use crate::goals::repo_types::Goal;
use crate::meals::repo_types::Meal;
use crate::weight::repo_types::WeightEntry;
use crate::workouts::repo_types::Workout;

const USERS_KEY: &str = "fittracker_users";
const CURRENT_USER_KEY: &str = "fittracker_current_user";
const USER_DATA_PREFIX: &str = "fittracker_user_data_";

/// One user's collections, persisted as a single aggregate under
/// `fittracker_user_data_<id>`. Mutations rewrite the whole aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub workouts: Vec<Workout>,
    pub meals: Vec<Meal>,
    pub goals: Vec<Goal>,
    pub weight_entries: Vec<WeightEntry>,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
}

impl Default for UserData {
    fn default() -> Self {
        Self {
            workouts: Vec::new(),
            meals: Vec::new(),
            goals: Vec::new(),
            weight_entries: Vec::new(),
            last_updated: OffsetDateTime::now_utc(),
        }
    }
}

/// Everything in the store as one serializable document, for backup files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSnapshot {
    pub users: Vec<User>,
    pub current_user: Option<User>,
    pub user_data: BTreeMap<String, UserData>,
    #[serde(with = "time::serde::rfc3339")]
    pub export_date: OffsetDateTime,
}

/// Key/value persistence of users, the active session and the per-user
/// aggregates. Reads that find nothing usable return an empty default; only
/// writes can fail.
pub struct LocalStore {
    backend: Box<dyn StorageBackend>,
}

impl LocalStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    fn read_or<T: DeserializeOwned>(&self, key: &str, default: impl FnOnce() -> T) -> T {
        match self.backend.load(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    warn!(key, error = %e, "malformed entry, using empty default");
                    default()
                }
            },
            Ok(None) => default(),
            Err(e) => {
                warn!(key, error = %e, "read failed, using empty default");
                default()
            }
        }
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value).map_err(|e| Error::Storage(e.to_string()))?;
        self.backend
            .store(key, &raw)
            .map_err(|e| Error::Storage(e.to_string()))
    }

    fn erase(&self, key: &str) -> Result<()> {
        self.backend
            .remove(key)
            .map_err(|e| Error::Storage(e.to_string()))
    }

    fn user_data_key(user_id: &str) -> String {
        format!("{USER_DATA_PREFIX}{user_id}")
    }

    pub fn users(&self) -> Vec<User> {
        self.read_or(USERS_KEY, Vec::new)
    }

    pub fn save_users(&self, users: &[User]) -> Result<()> {
        self.write(USERS_KEY, &users)
    }

    pub fn current_user(&self) -> Option<User> {
        self.read_or(CURRENT_USER_KEY, || None)
    }

    /// Point the session at a user, or clear it entirely.
    pub fn set_current_user(&self, user: Option<&User>) -> Result<()> {
        match user {
            Some(user) => self.write(CURRENT_USER_KEY, user),
            None => self.erase(CURRENT_USER_KEY),
        }
    }

    pub fn user_data(&self, user_id: &str) -> UserData {
        self.read_or(&Self::user_data_key(user_id), UserData::default)
    }

    /// Full overwrite of the aggregate. `last_updated` is restamped on every
    /// save; the stamped value is returned so callers can render from it.
    pub fn save_user_data(&self, user_id: &str, data: &UserData) -> Result<UserData> {
        let stamped = UserData {
            last_updated: OffsetDateTime::now_utc(),
            ..data.clone()
        };
        self.write(&Self::user_data_key(user_id), &stamped)?;
        Ok(stamped)
    }

    /// Users, session and every known user's aggregate in one document.
    pub fn export_all(&self) -> ExportSnapshot {
        let users = self.users();
        let user_data = users
            .iter()
            .map(|user| (user.id.clone(), self.user_data(&user.id)))
            .collect();
        ExportSnapshot {
            users,
            current_user: self.current_user(),
            user_data,
            export_date: OffsetDateTime::now_utc(),
        }
    }

    /// Pretty-printed snapshot, ready to be offered as a download.
    pub fn export_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.export_all()).map_err(|e| Error::Storage(e.to_string()))
    }

    /// Restore every key from a snapshot. Existing entries for the same keys
    /// are overwritten.
    pub fn import_all(&self, snapshot: &ExportSnapshot) -> Result<()> {
        self.save_users(&snapshot.users)?;
        self.set_current_user(snapshot.current_user.as_ref())?;
        for (user_id, data) in &snapshot.user_data {
            self.save_user_data(user_id, data)?;
        }
        Ok(())
    }

    /// Remove the users collection, the session pointer and each known
    /// user's aggregate.
    pub fn clear_all(&self) -> Result<()> {
        for user in self.users() {
            self.erase(&Self::user_data_key(&user.id))?;
        }
        self.erase(USERS_KEY)?;
        self.erase(CURRENT_USER_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repo_types::User;
    use crate::meals::repo_types::{Meal, MealType};

    fn memory_store() -> LocalStore {
        LocalStore::new(Box::new(MemoryBackend::default()))
    }

    fn sample_user(id: &str, email: &str) -> User {
        User {
            id: id.to_string(),
            name: "Sam".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$stub".to_string(),
            age: Some(31),
            height: None,
            weight: None,
            goal: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    fn sample_meal(id: &str, user_id: &str) -> Meal {
        Meal {
            id: id.to_string(),
            user_id: user_id.to_string(),
            kind: MealType::Lunch,
            food: "Salad".to_string(),
            calories: 400,
            protein: Some(30.0),
            carbs: None,
            fat: None,
            date: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn users_default_to_empty() {
        let store = memory_store();
        assert!(store.users().is_empty());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn users_roundtrip() {
        let store = memory_store();
        let users = vec![sample_user("1", "a@example.com"), sample_user("2", "b@example.com")];
        store.save_users(&users).expect("save");

        let loaded = store.users();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].email, "a@example.com");
        assert_eq!(loaded[1].id, "2");
    }

    #[test]
    fn corrupt_entries_degrade_to_defaults() {
        let backend = MemoryBackend::default();
        backend.store(USERS_KEY, "{not json").expect("seed");
        backend
            .store(&LocalStore::user_data_key("7"), "42")
            .expect("seed");
        let store = LocalStore::new(Box::new(backend));

        assert!(store.users().is_empty());
        let data = store.user_data("7");
        assert!(data.workouts.is_empty());
        assert!(data.meals.is_empty());
    }

    #[test]
    fn session_pointer_set_and_cleared() {
        let store = memory_store();
        let user = sample_user("1", "a@example.com");
        store.set_current_user(Some(&user)).expect("set");
        assert_eq!(store.current_user().map(|u| u.id), Some("1".to_string()));

        store.set_current_user(None).expect("clear");
        assert!(store.current_user().is_none());
    }

    #[test]
    fn save_user_data_restamps_last_updated() {
        let store = memory_store();
        let mut data = UserData::default();
        let old_stamp = OffsetDateTime::from_unix_timestamp(0).expect("epoch");
        data.last_updated = old_stamp;
        data.meals.push(sample_meal("m1", "1"));

        let saved = store.save_user_data("1", &data).expect("save");
        assert!(saved.last_updated > old_stamp);

        let reread = store.user_data("1");
        assert_eq!(reread.meals.len(), 1);
        assert!(reread.last_updated > old_stamp);
    }

    #[test]
    fn export_uses_documented_field_names() {
        let store = memory_store();
        let user = sample_user("1", "a@example.com");
        store.save_users(std::slice::from_ref(&user)).expect("save");
        store.set_current_user(Some(&user)).expect("session");

        let json = store.export_json().expect("export");
        assert!(json.contains("\"currentUser\""));
        assert!(json.contains("\"userData\""));
        assert!(json.contains("\"exportDate\""));
        assert!(json.contains("\"weightEntries\""));
        assert!(json.contains("\"lastUpdated\""));
        assert!(json.contains("\"createdAt\""));
    }

    #[test]
    fn export_clear_import_roundtrip() {
        let store = memory_store();
        let user = sample_user("1", "a@example.com");
        store.save_users(std::slice::from_ref(&user)).expect("save");
        store.set_current_user(Some(&user)).expect("session");
        let mut data = UserData::default();
        data.meals.push(sample_meal("m1", "1"));
        store.save_user_data("1", &data).expect("save data");

        let snapshot = store.export_all();
        store.clear_all().expect("clear");
        assert!(store.users().is_empty());
        assert!(store.current_user().is_none());
        assert!(store.user_data("1").meals.is_empty());

        store.import_all(&snapshot).expect("import");
        assert_eq!(store.users().len(), 1);
        assert_eq!(store.current_user().map(|u| u.email), Some("a@example.com".to_string()));
        let restored = store.user_data("1");
        assert_eq!(restored.meals.len(), 1);
        assert_eq!(restored.meals[0].food, "Salad");
    }
}
