pub mod dto;
pub mod password;
mod repo;
pub mod repo_types;
pub mod services;

pub use dto::{LoginRequest, ProfileUpdate, PublicUser, RegisterRequest};
pub use repo_types::{FitnessGoal, User};
