pub mod streaks;
mod streaks_test;
pub mod summary;

pub use streaks::{StreakSummary, StreakUseCase};
pub use summary::{DaySummary, DaySummaryUseCase};
