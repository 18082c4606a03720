use anyhow::Result;
use chrono::NaiveDate;

use crate::model::daily_record::DailyRecord;
use crate::model::meal::Meal;
use crate::model::workout::Workout;

/// Ordering of a history listing. The two streak scans need opposite
/// directions, so the store exposes this rather than fixing one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    Ascending,
    Descending,
}

pub trait MealRepository {
    fn create(&self, meal: Meal) -> Result<Meal>;
    fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Meal>>;
    fn delete_by_date(&self, date: NaiveDate) -> Result<()>;
}

pub trait WorkoutRepository {
    fn create(&self, workout: Workout) -> Result<Workout>;
    fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Workout>>;
    fn find_latest_by_exercise(&self, exercise_name: &str) -> Result<Option<Workout>>;
    fn delete_by_date(&self, date: NaiveDate) -> Result<()>;
}

/// The daily record store: one row per calendar date, upsert semantics.
pub trait DailyRecordRepository {
    fn upsert(&self, record: DailyRecord) -> Result<()>;
    fn get(&self, date: NaiveDate) -> Result<Option<DailyRecord>>;
    fn list(&self, order: DateOrder) -> Result<Vec<DailyRecord>>;
    fn count(&self) -> Result<usize>;
}
