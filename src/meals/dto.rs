use serde::Deserialize;

use crate::error::{Error, Result};
use crate::meals::repo_types::MealType;

/// Candidate meal; id, owner and date are assigned at insert time.
#[derive(Debug, Clone, Deserialize)]
pub struct InsertMeal {
    #[serde(rename = "type")]
    pub kind: MealType,
    pub food: String,
    pub calories: u32,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub carbs: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
}

impl InsertMeal {
    pub fn validate(&self) -> Result<()> {
        if self.food.trim().is_empty() {
            return Err(Error::validation("food", "Food item is required"));
        }
        for (field, value) in [
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
        ] {
            if let Some(grams) = value {
                if grams < 0.0 {
                    return Err(Error::validation(field, format!("{field} must be positive")));
                }
            }
        }
        Ok(())
    }
}
