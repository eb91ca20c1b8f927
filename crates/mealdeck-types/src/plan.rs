//! Meal plan and grocery list records.
//!
//! Plain display records for the main tabs. There is no planning logic
//! here; the client renders whatever plan it was handed.

use serde::{Deserialize, Serialize};

use crate::profile::{DayOfWeek, MealType};

/// A single planned meal within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMeal {
    pub meal_type: MealType,
    pub name: String,
    pub calories: u32,
}

/// One day of the weekly plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day: DayOfWeek,
    pub meals: Vec<PlannedMeal>,
}

impl DayPlan {
    /// Total calories across the day's meals.
    pub fn calories_total(&self) -> u32 {
        self.meals.iter().map(|m| m.calories).sum()
    }
}

/// An item on the grocery list, grouped by aisle in the groceries tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    pub name: String,
    /// Free-form quantity, e.g. "2 lbs" or "1 dozen".
    pub quantity: String,
    pub aisle: String,
    pub checked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: day calorie total sums the meals.
    #[test]
    fn test_day_calories_total() {
        let day = DayPlan {
            day: DayOfWeek::Monday,
            meals: vec![
                PlannedMeal {
                    meal_type: MealType::Breakfast,
                    name: "Oatmeal".to_string(),
                    calories: 350,
                },
                PlannedMeal {
                    meal_type: MealType::Dinner,
                    name: "Salmon bowl".to_string(),
                    calories: 620,
                },
            ],
        };
        assert_eq!(day.calories_total(), 970);
    }

    /// Test: empty day totals zero.
    #[test]
    fn test_empty_day_calories() {
        let day = DayPlan {
            day: DayOfWeek::Sunday,
            meals: Vec::new(),
        };
        assert_eq!(day.calories_total(), 0);
    }
}
