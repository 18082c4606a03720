use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde_json;

use crate::model::workout::Workout;
use crate::repository::traits::WorkoutRepository;

const WORKOUT_FILE_NAME: &str = "workouts.json";

#[derive(Clone)]
pub struct FileWorkoutRepository {
    file_path: PathBuf,
}

impl FileWorkoutRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".macrolog")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(WORKOUT_FILE_NAME);

        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &Vec::<Workout>::new())?;
            writer.flush()?;
        }

        Ok(FileWorkoutRepository { file_path: path })
    }

    fn read_workouts(&self) -> Result<Vec<Workout>> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let workouts = serde_json::from_reader(reader)?;
        Ok(workouts)
    }

    fn write_workouts(&self, workouts: &[Workout]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, workouts)?;
        writer.flush()?;
        Ok(())
    }
}

impl WorkoutRepository for FileWorkoutRepository {
    fn create(&self, workout: Workout) -> Result<Workout> {
        let mut workouts = self.read_workouts()?;
        workouts.push(workout.clone());
        self.write_workouts(&workouts)?;
        Ok(workout)
    }

    fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Workout>> {
        let mut workouts: Vec<Workout> = self
            .read_workouts()?
            .into_iter()
            .filter(|w| w.date_logged == date)
            .collect();
        // Most recent entry first; insertion order within the file is
        // chronological, so reversing is enough.
        workouts.reverse();
        Ok(workouts)
    }

    fn find_latest_by_exercise(&self, exercise_name: &str) -> Result<Option<Workout>> {
        let workouts = self.read_workouts()?;
        Ok(workouts
            .into_iter()
            .filter(|w| w.exercise_name.eq_ignore_ascii_case(exercise_name))
            .max_by_key(|w| w.date_logged))
    }

    fn delete_by_date(&self, date: NaiveDate) -> Result<()> {
        let mut workouts = self.read_workouts()?;
        workouts.retain(|w| w.date_logged != date);
        self.write_workouts(&workouts)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_repo() -> FileWorkoutRepository {
        let dir = std::env::temp_dir().join(format!("macrolog-test-{}", Uuid::new_v4()));
        FileWorkoutRepository::new(Some(dir)).unwrap()
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_latest_by_exercise_picks_newest_date() {
        let repo = temp_repo();
        repo.create(Workout::new("Bench Press".into(), 60.0, 8, 3, String::new(), date(1))).unwrap();
        repo.create(Workout::new("Bench Press".into(), 62.5, 8, 3, String::new(), date(5))).unwrap();
        repo.create(Workout::new("Squat".into(), 80.0, 5, 5, String::new(), date(6))).unwrap();

        let last = repo.find_latest_by_exercise("bench press").unwrap().unwrap();
        assert_eq!(last.weight, 62.5);
        assert_eq!(last.date_logged, date(5));
    }

    #[test]
    fn test_latest_by_exercise_none_when_never_done() {
        let repo = temp_repo();
        assert!(repo.find_latest_by_exercise("Deadlift").unwrap().is_none());
    }

    #[test]
    fn test_list_by_date_newest_first() {
        let repo = temp_repo();
        repo.create(Workout::new("Squat".into(), 80.0, 5, 5, String::new(), date(1))).unwrap();
        repo.create(Workout::new("Row".into(), 50.0, 10, 3, String::new(), date(1))).unwrap();

        let todays = repo.list_by_date(date(1)).unwrap();
        assert_eq!(todays[0].exercise_name, "Row");
        assert_eq!(todays[1].exercise_name, "Squat");
    }

    #[test]
    fn test_delete_by_date_leaves_other_days() {
        let repo = temp_repo();
        repo.create(Workout::new("Squat".into(), 80.0, 5, 5, String::new(), date(1))).unwrap();
        repo.create(Workout::new("Deadlift".into(), 100.0, 5, 3, String::new(), date(2))).unwrap();

        repo.delete_by_date(date(1)).unwrap();
        assert!(repo.list_by_date(date(1)).unwrap().is_empty());
        assert_eq!(repo.list_by_date(date(2)).unwrap().len(), 1);
    }
}
