use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde_json;

use crate::model::daily_record::DailyRecord;
use crate::repository::traits::{DailyRecordRepository, DateOrder};

const DAILY_RECORD_FILE_NAME: &str = "daily_records.json";

/// File-backed record store. Each call opens the file, does one read or
/// one read-modify-write, and releases it; no handle survives the call.
#[derive(Clone)]
pub struct FileDailyRecordRepository {
    file_path: PathBuf,
}

impl FileDailyRecordRepository {
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
        path.push(DAILY_RECORD_FILE_NAME);

        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &Vec::<DailyRecord>::new())?;
            writer.flush()?;
        }

        Ok(FileDailyRecordRepository { file_path: path })
    }

    fn read_records(&self) -> Result<Vec<DailyRecord>> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let records: Vec<DailyRecord> = serde_json::from_reader(reader)?;
        Ok(records)
    }

    fn write_records(&self, records: &[DailyRecord]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, records)?;
        writer.flush()?;
        Ok(())
    }
}

impl DailyRecordRepository for FileDailyRecordRepository {
    fn upsert(&self, record: DailyRecord) -> Result<()> {
        let mut records = self.read_records()?;
        if let Some(pos) = records.iter().position(|r| r.date == record.date) {
            records[pos] = record;
        } else {
            records.push(record);
        }
        self.write_records(&records)?;
        Ok(())
    }

    fn get(&self, date: NaiveDate) -> Result<Option<DailyRecord>> {
        let records = self.read_records()?;
        Ok(records.into_iter().find(|r| r.date == date))
    }

    fn list(&self, order: DateOrder) -> Result<Vec<DailyRecord>> {
        let mut records = self.read_records()?;
        match order {
            DateOrder::Ascending => records.sort_by_key(|r| r.date),
            DateOrder::Descending => {
                records.sort_by_key(|r| r.date);
                records.reverse();
            }
        }
        Ok(records)
    }

    fn count(&self) -> Result<usize> {
        Ok(self.read_records()?.len())
    }
}
