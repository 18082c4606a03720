pub mod daily_record;
pub mod goals;
pub mod meal;
pub mod traits;
pub mod workout;

// Re-export
pub use daily_record::FileDailyRecordRepository;
pub use goals::FileGoalsRepository;
pub use meal::FileMealRepository;
pub use traits::{DailyRecordRepository, DateOrder, MealRepository, WorkoutRepository};
pub use workout::FileWorkoutRepository;
