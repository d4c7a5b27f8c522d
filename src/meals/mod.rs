pub mod dto;
pub mod repo_types;
pub mod services;

pub use dto::InsertMeal;
pub use repo_types::{Meal, MealType};
