pub mod dto;
pub mod repo_types;
pub mod services;

pub use dto::InsertWorkout;
pub use repo_types::{Workout, WorkoutType};
