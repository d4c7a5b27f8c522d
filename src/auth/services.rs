use lazy_static::lazy_static;
use regex::Regex;
use time::OffsetDateTime;
use tracing::{error, info, warn};

use crate::auth::dto::{validate_profile, LoginRequest, ProfileUpdate, RegisterRequest};
use crate::auth::password::{hash_password, verify_password};
use crate::auth::repo_types::User;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::ids::next_record_id;
use crate::store::LocalStore;

/// Fixed credential pair that signs in without a registration.
pub const DEMO_EMAIL: &str = "demo@fittracker.com";
pub const DEMO_PASSWORD: &str = "demo123";

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn demo_user() -> Result<User> {
    Ok(User {
        id: "demo".to_string(),
        name: "Demo User".to_string(),
        email: DEMO_EMAIL.to_string(),
        password_hash: hash_password(DEMO_PASSWORD)?,
        age: None,
        height: None,
        weight: None,
        goal: None,
        created_at: OffsetDateTime::now_utc(),
    })
}

/// Sign a user in and establish the session. Malformed input is the only
/// hard failure; an unknown email or a wrong password comes back as
/// `NotFound` with a message fit for the login form.
pub fn login(store: &LocalStore, config: &AppConfig, mut req: LoginRequest) -> Result<User> {
    req.email = req.email.trim().to_lowercase();
    req.validate()?;

    if config.demo_login_enabled && req.email == DEMO_EMAIL && req.password == DEMO_PASSWORD {
        let demo = demo_user()?;
        store.set_current_user(Some(&demo))?;
        info!(user_id = %demo.id, "demo login");
        return Ok(demo);
    }

    let Some(user) = User::find_by_email(store, &req.email) else {
        warn!(email = %req.email, "login unknown email");
        return Err(Error::NotFound("Invalid email or password".to_string()));
    };

    let verified = match verify_password(&req.password, &user.password_hash) {
        Ok(v) => v,
        Err(e) => {
            // A hash we can no longer parse reads as a failed credential.
            error!(user_id = %user.id, error = %e, "stored password hash unusable");
            false
        }
    };
    if !verified {
        warn!(email = %req.email, user_id = %user.id, "login invalid password");
        return Err(Error::NotFound("Invalid email or password".to_string()));
    }

    store.set_current_user(Some(&user))?;
    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(user)
}

/// Create an account, persist it and establish the session. A duplicate
/// email fails with a conflict regardless of the other fields.
pub fn register(store: &LocalStore, mut req: RegisterRequest) -> Result<User> {
    req.email = req.email.trim().to_lowercase();
    req.validate()?;

    if User::find_by_email(store, &req.email).is_some() {
        warn!(email = %req.email, "email already registered");
        return Err(Error::Conflict("Email already registered".to_string()));
    }

    let user = User {
        id: next_record_id(),
        name: req.name.trim().to_string(),
        email: req.email.clone(),
        password_hash: hash_password(&req.password)?,
        age: req.age,
        height: req.height,
        weight: req.weight,
        goal: req.goal,
        created_at: OffsetDateTime::now_utc(),
    };
    let user = User::append(store, user)?;
    store.set_current_user(Some(&user))?;
    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(user)
}

/// Clear the session pointer. User data stays in place.
pub fn logout(store: &LocalStore) -> Result<()> {
    if let Some(user) = store.current_user() {
        info!(user_id = %user.id, "user logged out");
    }
    store.set_current_user(None)
}

/// The signed-in user, if any.
pub fn current(store: &LocalStore) -> Option<User> {
    store.current_user()
}

/// Merge a partial edit into the signed-in user and persist both the session
/// pointer and the users-collection entry. An edit that fails re-validation
/// or persistence is dropped with a warning and the stored record comes back
/// unchanged.
pub fn update_profile(store: &LocalStore, current: &User, update: ProfileUpdate) -> User {
    let mut merged = current.clone();
    if let Some(name) = update.name {
        merged.name = name;
    }
    if let Some(email) = update.email {
        merged.email = email.trim().to_lowercase();
    }
    if update.age.is_some() {
        merged.age = update.age;
    }
    if update.height.is_some() {
        merged.height = update.height;
    }
    if update.weight.is_some() {
        merged.weight = update.weight;
    }
    if update.goal.is_some() {
        merged.goal = update.goal;
    }

    if let Err(e) = validate_profile(&merged) {
        warn!(user_id = %current.id, error = %e, "profile update discarded");
        return current.clone();
    }

    let persisted = store
        .set_current_user(Some(&merged))
        .and_then(|_| User::replace(store, &merged));
    if let Err(e) = persisted {
        warn!(user_id = %current.id, error = %e, "profile update not persisted");
        return current.clone();
    }

    info!(user_id = %merged.id, "profile updated");
    merged
}
