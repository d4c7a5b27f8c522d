use std::collections::BTreeMap;

use serde::Serialize;
use time::Date;

use crate::meals::repo_types::{Meal, MealType};
use crate::store::UserData;

/// Daily intake targets the summary is measured against.
const CALORIE_TARGET: f64 = 2_200.0;
const PROTEIN_TARGET: f64 = 120.0;
const CARBS_TARGET: f64 = 250.0;
const FAT_TARGET: f64 = 80.0;

/// Progress toward one nutrient's daily target.
#[derive(Debug, Clone, Serialize)]
pub struct MacroQuota {
    pub current: f64,
    pub target: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct NutritionSummary {
    pub calories: MacroQuota,
    pub protein: MacroQuota,
    pub carbs: MacroQuota,
    pub fat: MacroQuota,
    /// The day's meals bucketed by slot, newest first within each bucket.
    pub meals_by_type: BTreeMap<MealType, Vec<Meal>>,
}

/// Reduce a user's meals to the nutrition view for one day.
pub fn nutrition(today: Date, data: &UserData) -> NutritionSummary {
    let mut meals: Vec<Meal> = data
        .meals
        .iter()
        .filter(|m| m.date.date() == today)
        .cloned()
        .collect();
    meals.sort_by(|a, b| b.date.cmp(&a.date));

    let calories: u32 = meals.iter().map(|m| m.calories).sum();
    let protein: f64 = meals.iter().filter_map(|m| m.protein).sum();
    let carbs: f64 = meals.iter().filter_map(|m| m.carbs).sum();
    let fat: f64 = meals.iter().filter_map(|m| m.fat).sum();

    let mut meals_by_type: BTreeMap<MealType, Vec<Meal>> = BTreeMap::new();
    for meal in meals {
        meals_by_type.entry(meal.kind).or_default().push(meal);
    }

    NutritionSummary {
        calories: MacroQuota {
            current: calories as f64,
            target: CALORIE_TARGET,
        },
        protein: MacroQuota {
            current: protein,
            target: PROTEIN_TARGET,
        },
        carbs: MacroQuota {
            current: carbs,
            target: CARBS_TARGET,
        },
        fat: MacroQuota {
            current: fat,
            target: FAT_TARGET,
        },
        meals_by_type,
    }
}
