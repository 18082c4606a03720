use anyhow::Result;
use chrono::NaiveDate;

use crate::model::workout::Workout;
use crate::repository::WorkoutRepository;

pub struct WorkoutService<R: WorkoutRepository> {
    repo: R,
}

impl<R: WorkoutRepository> WorkoutService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn add_workout(
        &self,
        exercise_name: String,
        weight: f64,
        reps: u32,
        sets: u32,
        notes: String,
        date: NaiveDate,
    ) -> Result<Workout> {
        let workout = Workout::new(exercise_name, weight, reps, sets, notes, date);
        self.repo.create(workout)
    }

    pub fn workouts_for(&self, date: NaiveDate) -> Result<Vec<Workout>> {
        self.repo.list_by_date(date)
    }

    /// The last session of this exercise anywhere in history, for the
    /// "what did I lift last time" display.
    pub fn last_workout(&self, exercise_name: &str) -> Result<Option<Workout>> {
        self.repo.find_latest_by_exercise(exercise_name)
    }

    pub fn clear_day(&self, date: NaiveDate) -> Result<()> {
        self.repo.delete_by_date(date)
    }
}
