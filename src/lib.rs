//! Personal fitness tracker core: validated records, a per-browser-style
//! local store, session management and the page-level summaries. Rendering
//! is left entirely to the host.
//!
//! Everything is synchronous and single-user; storage is a pluggable
//! key/value backend with a file-per-key default.

pub mod auth;
pub mod config;
pub mod error;
pub mod goals;
mod ids;
pub mod meals;
pub mod state;
pub mod store;
pub mod summary;
pub mod telemetry;
pub mod weight;
pub mod workouts;

pub use auth::{FitnessGoal, LoginRequest, ProfileUpdate, PublicUser, RegisterRequest, User};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use goals::{Goal, GoalKind, GoalPeriod, InsertGoal};
pub use meals::{InsertMeal, Meal, MealType};
pub use state::App;
pub use store::{ExportSnapshot, LocalStore, UserData};
pub use weight::{InsertWeightEntry, WeightEntry};
pub use workouts::{InsertWorkout, Workout, WorkoutType};
