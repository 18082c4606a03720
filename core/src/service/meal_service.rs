use anyhow::Result;
use chrono::NaiveDate;

use crate::model::meal::{Meal, MealTime};
use crate::repository::MealRepository;

/// Summed macros for one day's meals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DayTotals {
    pub protein: f64,
    pub calories: f64,
}

pub struct MealService<R: MealRepository> {
    repo: R,
}

impl<R: MealRepository> MealService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// `protein` and `calories` are totals for the logged quantity; the
    /// caller has already done any per-unit conversion.
    pub fn add_meal(
        &self,
        food_name: String,
        quantity: f64,
        protein: f64,
        calories: f64,
        meal_time: MealTime,
        date: NaiveDate,
    ) -> Result<Meal> {
        let meal = Meal::new(food_name, quantity, protein, calories, meal_time, date);
        self.repo.create(meal)
    }

    pub fn meals_for(&self, date: NaiveDate) -> Result<Vec<Meal>> {
        self.repo.list_by_date(date)
    }

    pub fn clear_day(&self, date: NaiveDate) -> Result<()> {
        self.repo.delete_by_date(date)
    }

    pub fn day_totals(&self, date: NaiveDate) -> Result<DayTotals> {
        let meals = self.repo.list_by_date(date)?;
        let mut totals = DayTotals::default();
        for meal in &meals {
            totals.protein += meal.protein;
            totals.calories += meal.calories;
        }
        Ok(totals)
    }
}
