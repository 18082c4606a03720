use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealTime {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl std::fmt::Display for MealTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MealTime::Breakfast => "Breakfast",
            MealTime::Lunch => "Lunch",
            MealTime::Dinner => "Dinner",
            MealTime::Snack => "Snack",
        };
        write!(f, "{}", s)
    }
}

/// A single logged food entry. `protein` and `calories` are totals for the
/// logged quantity, not per-unit values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Meal {
    pub id: Uuid,
    pub food_name: String,
    pub quantity: f64,
    pub protein: f64,
    pub calories: f64,
    pub meal_time: MealTime,
    pub date_logged: NaiveDate,
}

impl Meal {
    pub fn new(
        food_name: String,
        quantity: f64,
        protein: f64,
        calories: f64,
        meal_time: MealTime,
        date_logged: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            food_name,
            quantity,
            protein,
            calories,
            meal_time,
            date_logged,
        }
    }
}
