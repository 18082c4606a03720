pub mod daily_record;
pub mod goals;
pub mod meal;
pub mod workout;

pub use daily_record::DailyRecord;
pub use goals::Goals;
pub use meal::{Meal, MealTime};
pub use workout::Workout;
