use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

/// One row per calendar date recording whether that day's goals were hit.
/// `both_goals_met` is derived in the constructor and stored redundantly
/// so streak queries never have to recompute it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub protein_goal_met: bool,
    pub calorie_goal_met: bool,
    pub both_goals_met: bool,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, protein_goal_met: bool, calorie_goal_met: bool) -> Self {
        Self {
            date,
            protein_goal_met,
            calorie_goal_met,
            both_goals_met: protein_goal_met && calorie_goal_met,
        }
    }
}
