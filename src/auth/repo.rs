use crate::auth::repo_types::User;
use crate::error::Result;
use crate::store::LocalStore;

impl User {
    /// Find a user by (already normalized) email.
    pub fn find_by_email(store: &LocalStore, email: &str) -> Option<User> {
        store.users().into_iter().find(|u| u.email == email)
    }

    /// Append to the users collection and persist it.
    pub fn append(store: &LocalStore, user: User) -> Result<User> {
        let mut users = store.users();
        users.push(user.clone());
        store.save_users(&users)?;
        Ok(user)
    }

    /// Replace the entry with the same id in the users collection.
    pub fn replace(store: &LocalStore, user: &User) -> Result<()> {
        let users: Vec<User> = store
            .users()
            .into_iter()
            .map(|u| if u.id == user.id { user.clone() } else { u })
            .collect();
        store.save_users(&users)
    }
}
