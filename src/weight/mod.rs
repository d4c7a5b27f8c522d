pub mod dto;
pub mod repo_types;
pub mod services;

pub use dto::InsertWeightEntry;
pub use repo_types::WeightEntry;
