use serde::{Deserialize, Serialize};

use crate::auth::repo_types::{FitnessGoal, User};
use crate::auth::services::is_valid_email;
use crate::error::{Error, Result};

/// Registration payload. The id and creation timestamp are assigned by the
/// service, so they are not part of the candidate record.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub goal: Option<FitnessGoal>,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::validation("name", "Name is required"));
        }
        if !is_valid_email(&self.email) {
            return Err(Error::validation("email", "Invalid email address"));
        }
        if self.password.chars().count() < 6 {
            return Err(Error::validation(
                "password",
                "Password must be at least 6 characters",
            ));
        }
        Ok(())
    }
}

/// Login payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<()> {
        if !is_valid_email(&self.email) {
            return Err(Error::validation("email", "Invalid email address"));
        }
        if self.password.is_empty() {
            return Err(Error::validation("password", "Password is required"));
        }
        Ok(())
    }
}

/// Partial profile edit; `None` keeps the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub goal: Option<FitnessGoal>,
}

/// Constraints a stored user record must satisfy after a profile merge.
pub(crate) fn validate_profile(user: &User) -> Result<()> {
    if user.name.trim().is_empty() {
        return Err(Error::validation("name", "Name is required"));
    }
    if !is_valid_email(&user.email) {
        return Err(Error::validation("email", "Invalid email address"));
    }
    if let Some(age) = user.age {
        if !(1..=120).contains(&age) {
            return Err(Error::validation("age", "Age must be between 1 and 120"));
        }
    }
    if let Some(height) = user.height {
        if !(1.0..=300.0).contains(&height) {
            return Err(Error::validation(
                "height",
                "Height must be between 1 and 300 cm",
            ));
        }
    }
    if let Some(weight) = user.weight {
        if !(1.0..=500.0).contains(&weight) {
            return Err(Error::validation(
                "weight",
                "Weight must be between 1 and 500 kg",
            ));
        }
    }
    Ok(())
}

/// Public part of the user handed to the UI; never carries the hash.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegisterRequest {
        RegisterRequest {
            name: "Sam".into(),
            email: "sam@example.com".into(),
            password: "hunter22".into(),
            age: None,
            height: None,
            weight: None,
            goal: None,
        }
    }

    #[test]
    fn register_request_accepts_valid_input() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn register_request_rejects_blank_name() {
        let mut req = request();
        req.name = "   ".into();
        let err = req.validate().unwrap_err();
        assert!(matches!(err, Error::Validation { field: "name", .. }));
    }

    #[test]
    fn register_request_rejects_bad_email() {
        let mut req = request();
        req.email = "not-an-email".into();
        let err = req.validate().unwrap_err();
        assert!(matches!(err, Error::Validation { field: "email", .. }));
    }

    #[test]
    fn register_request_rejects_short_password() {
        let mut req = request();
        req.password = "sixsix".into();
        assert!(req.validate().is_ok(), "six chars is the floor");
        req.password = "five5".into();
        let err = req.validate().unwrap_err();
        assert!(matches!(err, Error::Validation { field: "password", .. }));
    }

    #[test]
    fn login_request_requires_password() {
        let req = LoginRequest {
            email: "sam@example.com".into(),
            password: String::new(),
        };
        let err = req.validate().unwrap_err();
        assert!(matches!(err, Error::Validation { field: "password", .. }));
    }
}
