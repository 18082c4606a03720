use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde_json;

use crate::model::meal::Meal;
use crate::repository::traits::MealRepository;

const MEAL_FILE_NAME: &str = "meals.json";

#[derive(Clone)]
pub struct FileMealRepository {
    file_path: PathBuf,
}

impl FileMealRepository {
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
        path.push(MEAL_FILE_NAME);

        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &Vec::<Meal>::new())?;
            writer.flush()?;
        }

        Ok(FileMealRepository { file_path: path })
    }

    fn read_meals(&self) -> Result<Vec<Meal>> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let meals = serde_json::from_reader(reader)?;
        Ok(meals)
    }

    fn write_meals(&self, meals: &[Meal]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, meals)?;
        writer.flush()?;
        Ok(())
    }
}

impl MealRepository for FileMealRepository {
    fn create(&self, meal: Meal) -> Result<Meal> {
        let mut meals = self.read_meals()?;
        meals.push(meal.clone());
        self.write_meals(&meals)?;
        Ok(meal)
    }

    fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Meal>> {
        let meals = self.read_meals()?;
        Ok(meals.into_iter().filter(|m| m.date_logged == date).collect())
    }

    fn delete_by_date(&self, date: NaiveDate) -> Result<()> {
        let mut meals = self.read_meals()?;
        meals.retain(|m| m.date_logged != date);
        self.write_meals(&meals)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::meal::MealTime;
    use uuid::Uuid;

    fn temp_repo() -> FileMealRepository {
        let dir = std::env::temp_dir().join(format!("macrolog-test-{}", Uuid::new_v4()));
        FileMealRepository::new(Some(dir)).unwrap()
    }

    #[test]
    fn test_create_and_list_by_date() {
        let repo = temp_repo();
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

        repo.create(Meal::new("Chicken".into(), 200.0, 62.0, 330.0, MealTime::Lunch, d1)).unwrap();
        repo.create(Meal::new("Yogurt".into(), 100.0, 3.5, 60.0, MealTime::Snack, d2)).unwrap();

        let day_one = repo.list_by_date(d1).unwrap();
        assert_eq!(day_one.len(), 1);
        assert_eq!(day_one[0].food_name, "Chicken");
    }

    #[test]
    fn test_delete_by_date_leaves_other_days() {
        let repo = temp_repo();
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

        repo.create(Meal::new("Rice".into(), 150.0, 4.0, 195.0, MealTime::Dinner, d1)).unwrap();
        repo.create(Meal::new("Fish".into(), 100.0, 25.0, 140.0, MealTime::Dinner, d2)).unwrap();

        repo.delete_by_date(d1).unwrap();
        assert!(repo.list_by_date(d1).unwrap().is_empty());
        assert_eq!(repo.list_by_date(d2).unwrap().len(), 1);
    }
}
