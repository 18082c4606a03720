pub mod meal_service;
pub mod workout_service;

pub use meal_service::{DayTotals, MealService};
pub use workout_service::WorkoutService;
