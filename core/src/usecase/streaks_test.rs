#[cfg(test)]
mod tests {
    use crate::model::daily_record::DailyRecord;
    use crate::repository::traits::{DailyRecordRepository, DateOrder};
    use crate::usecase::streaks::StreakUseCase;
    use anyhow::Result;
    use chrono::NaiveDate;
    use std::cell::RefCell;

    struct MockDailyRecordRepo {
        records: RefCell<Vec<DailyRecord>>,
    }

    impl MockDailyRecordRepo {
        fn new() -> Self {
            Self { records: RefCell::new(Vec::new()) }
        }

        fn with(records: Vec<DailyRecord>) -> Self {
            Self { records: RefCell::new(records) }
        }
    }

    impl DailyRecordRepository for MockDailyRecordRepo {
        fn upsert(&self, record: DailyRecord) -> Result<()> {
            let mut records = self.records.borrow_mut();
            if let Some(pos) = records.iter().position(|r| r.date == record.date) {
                records[pos] = record;
            } else {
                records.push(record);
            }
            Ok(())
        }

        fn get(&self, date: NaiveDate) -> Result<Option<DailyRecord>> {
            Ok(self.records.borrow().iter().find(|r| r.date == date).cloned())
        }

        fn list(&self, order: DateOrder) -> Result<Vec<DailyRecord>> {
            let mut records = self.records.borrow().clone();
            records.sort_by_key(|r| r.date);
            if order == DateOrder::Descending {
                records.reverse();
            }
            Ok(records)
        }

        fn count(&self) -> Result<usize> {
            Ok(self.records.borrow().len())
        }
    }

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn met(day: u32) -> DailyRecord {
        DailyRecord::new(jan(day), true, true)
    }

    fn unmet(day: u32) -> DailyRecord {
        DailyRecord::new(jan(day), false, false)
    }

    #[test]
    fn test_empty_history() {
        let repo = MockDailyRecordRepo::new();
        let streaks = StreakUseCase::new(&repo);

        assert_eq!(streaks.current_streak(jan(1)).unwrap(), 0);
        assert_eq!(streaks.best_streak().unwrap(), 0);
        assert_eq!(streaks.total_days_tracked().unwrap(), 0);
    }

    #[test]
    fn test_three_consecutive_met_days() {
        // Scenario A
        let repo = MockDailyRecordRepo::with(vec![met(1), met(2), met(3)]);
        let streaks = StreakUseCase::new(&repo);

        assert_eq!(streaks.current_streak(jan(3)).unwrap(), 3);
        assert_eq!(streaks.best_streak().unwrap(), 3);
        assert_eq!(streaks.total_days_tracked().unwrap(), 3);
    }

    #[test]
    fn test_unmet_today_zeroes_current_but_not_best() {
        // Scenario B
        let repo = MockDailyRecordRepo::with(vec![met(1), met(2), met(3), unmet(4)]);
        let streaks = StreakUseCase::new(&repo);

        assert_eq!(streaks.current_streak(jan(4)).unwrap(), 0);
        assert_eq!(streaks.best_streak().unwrap(), 3);
    }

    #[test]
    fn test_best_run_after_an_unmet_day() {
        // Scenario C: 2 met, 1 unmet, 3 met.
        let repo = MockDailyRecordRepo::with(vec![
            met(1), met(2), unmet(3), met(4), met(5), met(6),
        ]);
        let streaks = StreakUseCase::new(&repo);

        assert_eq!(streaks.best_streak().unwrap(), 3);
        assert_eq!(streaks.current_streak(jan(6)).unwrap(), 3);
    }

    #[test]
    fn test_absent_date_breaks_run_via_day_jump() {
        // Scenario D: met on the 1st and 3rd, nothing recorded on the 2nd.
        // The two-day jump between met records resets the run.
        let repo = MockDailyRecordRepo::with(vec![met(1), met(3)]);
        let streaks = StreakUseCase::new(&repo);

        assert_eq!(streaks.best_streak().unwrap(), 1);
    }

    #[test]
    fn test_today_unrecorded_means_no_current_streak() {
        let repo = MockDailyRecordRepo::with(vec![met(1), met(2)]);
        let streaks = StreakUseCase::new(&repo);

        assert_eq!(streaks.current_streak(jan(3)).unwrap(), 0);
    }

    #[test]
    fn test_old_met_day_does_not_reach_current_streak() {
        // Met three days ago but not since; the scan stops at the first
        // mismatch even though an older record exists.
        let repo = MockDailyRecordRepo::with(vec![met(1), met(4), met(5)]);
        let streaks = StreakUseCase::new(&repo);

        assert_eq!(streaks.current_streak(jan(5)).unwrap(), 2);
    }

    #[test]
    fn test_recording_is_an_idempotent_upsert() {
        let repo = MockDailyRecordRepo::new();
        let streaks = StreakUseCase::new(&repo);

        streaks.record_daily_outcome(jan(1), true, false).unwrap();
        streaks.record_daily_outcome(jan(1), true, false).unwrap();

        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(
            repo.get(jan(1)).unwrap().unwrap(),
            DailyRecord::new(jan(1), true, false)
        );
    }

    #[test]
    fn test_rerecording_flips_the_stored_outcome() {
        let repo = MockDailyRecordRepo::new();
        let streaks = StreakUseCase::new(&repo);

        streaks.record_daily_outcome(jan(1), false, true).unwrap();
        streaks.record_daily_outcome(jan(1), true, true).unwrap();

        let stored = repo.get(jan(1)).unwrap().unwrap();
        assert!(stored.both_goals_met);
        assert_eq!(streaks.current_streak(jan(1)).unwrap(), 1);
    }

    #[test]
    fn test_current_streak_never_exceeds_best() {
        let repo = MockDailyRecordRepo::with(vec![
            met(1), met(2), met(3), unmet(4), met(5), met(6),
        ]);
        let streaks = StreakUseCase::new(&repo);

        let summary = streaks.summary(jan(6)).unwrap();
        assert!(summary.current <= summary.best);
        assert_eq!(summary.current, 2);
        assert_eq!(summary.best, 3);
        assert_eq!(summary.days_tracked, 6);
    }

    #[test]
    fn test_partially_met_days_do_not_count() {
        let repo = MockDailyRecordRepo::with(vec![
            DailyRecord::new(jan(1), true, false),
            DailyRecord::new(jan(2), false, true),
        ]);
        let streaks = StreakUseCase::new(&repo);

        assert_eq!(streaks.current_streak(jan(2)).unwrap(), 0);
        assert_eq!(streaks.best_streak().unwrap(), 0);
        assert_eq!(streaks.total_days_tracked().unwrap(), 2);
    }
}
