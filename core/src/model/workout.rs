use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use uuid::Uuid;

/// One gym session entry: an exercise with the weight/reps/sets performed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: Uuid,
    pub exercise_name: String,
    pub weight: f64,
    pub reps: u32,
    pub sets: u32,
    pub notes: String,
    pub date_logged: NaiveDate,
}

impl Workout {
    pub fn new(
        exercise_name: String,
        weight: f64,
        reps: u32,
        sets: u32,
        notes: String,
        date_logged: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            exercise_name,
            weight,
            reps,
            sets,
            notes,
            date_logged,
        }
    }
}
