use anyhow::Result;
use chrono::NaiveDate;

use crate::model::goals::Goals;
use crate::repository::MealRepository;
use crate::service::meal_service::MealService;

/// One day's intake measured against the user's goals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DaySummary {
    pub protein_total: f64,
    pub calorie_total: f64,
    pub protein_percentage: f64,
    pub calorie_percentage: f64,
    pub protein_goal_met: bool,
    pub calorie_goal_met: bool,
    /// Celebration flag for the home view: either bar has filled up.
    pub goal_reached: bool,
}

/// Sums a day's logged meals and derives the goal-met flags that feed the
/// daily record store. Goals are passed in by the caller, never read from
/// ambient state.
pub struct DaySummaryUseCase<'a, R: MealRepository> {
    meal_service: &'a MealService<R>,
}

impl<'a, R: MealRepository> DaySummaryUseCase<'a, R> {
    pub fn new(meal_service: &'a MealService<R>) -> Self {
        Self { meal_service }
    }

    pub fn summarize(&self, date: NaiveDate, goals: &Goals) -> Result<DaySummary> {
        let totals = self.meal_service.day_totals(date)?;

        let protein_percentage = if goals.protein_goal > 0.0 {
            totals.protein / goals.protein_goal * 100.0
        } else {
            0.0
        };
        let calorie_percentage = if goals.calorie_goal > 0.0 {
            totals.calories / goals.calorie_goal * 100.0
        } else {
            0.0
        };

        Ok(DaySummary {
            protein_total: totals.protein,
            calorie_total: totals.calories,
            protein_percentage,
            calorie_percentage,
            protein_goal_met: goals.protein_goal > 0.0 && totals.protein >= goals.protein_goal,
            calorie_goal_met: goals.calorie_goal > 0.0 && totals.calories >= goals.calorie_goal,
            goal_reached: protein_percentage >= 100.0 || calorie_percentage >= 100.0,
        })
    }
}
