use std::fs;
use std::path::PathBuf;
use anyhow::{anyhow, Result};

use crate::model::goals::Goals;

const GOALS_FILE_NAME: &str = "goals.json";

/// Persists the user's macro targets. Loading an absent file yields the
/// defaults rather than an error, so a fresh install works immediately.
#[derive(Clone)]
pub struct FileGoalsRepository {
    file_path: PathBuf,
}

impl FileGoalsRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".macrolog")
            }
        };
        fs::create_dir_all(&path)?;
        Ok(Self {
            file_path: path.join(GOALS_FILE_NAME),
        })
    }

    pub fn load(&self) -> Result<Goals> {
        if self.file_path.exists() {
            let content = fs::read_to_string(&self.file_path)?;
            let goals: Goals = serde_json::from_str(&content)?;
            Ok(goals)
        } else {
            Ok(Goals::default())
        }
    }

    pub fn save(&self, goals: &Goals) -> Result<()> {
        let content = serde_json::to_string_pretty(goals)?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_repo() -> FileGoalsRepository {
        let dir = std::env::temp_dir().join(format!("macrolog-test-{}", Uuid::new_v4()));
        FileGoalsRepository::new(Some(dir)).unwrap()
    }

    #[test]
    fn test_load_defaults_when_unset() {
        let repo = temp_repo();
        assert_eq!(repo.load().unwrap(), Goals::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let repo = temp_repo();
        let goals = Goals { protein_goal: 120.0, calorie_goal: 2000.0 };
        repo.save(&goals).unwrap();
        assert_eq!(repo.load().unwrap(), goals);
    }
}
