use anyhow::Result;
use chrono::{Duration, NaiveDate};

use crate::model::daily_record::DailyRecord;
use crate::repository::traits::{DailyRecordRepository, DateOrder};

/// Everything the streak display needs, fetched in one go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakSummary {
    pub current: u32,
    pub best: u32,
    pub days_tracked: usize,
}

/// Derives consecutive-day streaks from the daily record history. Holds no
/// state of its own; every query recomputes from the store.
pub struct StreakUseCase<'a, R: DailyRecordRepository> {
    repo: &'a R,
}

impl<'a, R: DailyRecordRepository> StreakUseCase<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// Record whether `date`'s goals were hit. Upserts, so revisiting the
    /// home view later the same day just overwrites the row.
    pub fn record_daily_outcome(
        &self,
        date: NaiveDate,
        protein_met: bool,
        calorie_met: bool,
    ) -> Result<()> {
        self.repo
            .upsert(DailyRecord::new(date, protein_met, calorie_met))
    }

    /// Consecutive fully-met days counting backward from `today`, gap-free.
    /// If `today` has no record yet (or missed a goal) the streak is 0;
    /// recording today's outcome first is the caller's job.
    pub fn current_streak(&self, today: NaiveDate) -> Result<u32> {
        let records = self.repo.list(DateOrder::Descending)?;

        let mut streak: u32 = 0;
        for (i, record) in records.iter().filter(|r| r.both_goals_met).enumerate() {
            let expected = today - Duration::days(i as i64);
            if record.date == expected {
                streak += 1;
            } else {
                break;
            }
        }
        Ok(streak)
    }

    /// Longest run of consecutive fully-met dates anywhere in history.
    ///
    /// Scans every record ascending, met or not: an explicit unmet record
    /// always breaks the run, while a wholly-absent date breaks it only
    /// through the >1-day jump between the surrounding met records. The
    /// two rules coincide for single-day gaps; for multi-day absences the
    /// jump rule is the one that applies, and that behavior is kept as-is.
    pub fn best_streak(&self) -> Result<u32> {
        let records = self.repo.list(DateOrder::Ascending)?;

        let mut current_run: u32 = 0;
        let mut max_run: u32 = 0;
        let mut previous_met_date: Option<NaiveDate> = None;

        for record in &records {
            if record.both_goals_met {
                let contiguous = match previous_met_date {
                    None => true,
                    Some(prev) => record.date - prev == Duration::days(1),
                };
                if contiguous {
                    current_run += 1;
                    max_run = max_run.max(current_run);
                } else {
                    current_run = 1;
                }
                previous_met_date = Some(record.date);
            } else {
                current_run = 0;
                previous_met_date = None;
            }
        }
        Ok(max_run)
    }

    pub fn total_days_tracked(&self) -> Result<usize> {
        self.repo.count()
    }

    pub fn summary(&self, today: NaiveDate) -> Result<StreakSummary> {
        Ok(StreakSummary {
            current: self.current_streak(today)?,
            best: self.best_streak()?,
            days_tracked: self.total_days_tracked()?,
        })
    }
}
