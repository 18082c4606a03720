pub mod catalog;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use model::{DailyRecord, Goals, Meal, MealTime, Workout};
pub use repository::{
    DailyRecordRepository, DateOrder, FileDailyRecordRepository, FileGoalsRepository,
    FileMealRepository, FileWorkoutRepository, MealRepository, WorkoutRepository,
};
pub use service::{DayTotals, MealService, WorkoutService};
pub use time::{parse_log_date, today};
pub use usecase::{DaySummary, DaySummaryUseCase, StreakSummary, StreakUseCase};
