//! Best-score persistence.
//!
//! The engine only ever sees the [`ScoreStore`] trait. Failures are returned
//! to it and it decides what to do with them.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub trait ScoreStore {
    fn load(&mut self) -> Result<u32>;
    fn save(&mut self, best_score: u32) -> Result<()>;
}

/// On-disk shape of the best-score file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestScoreRecord {
    pub best_score: u32,
    pub updated_at: DateTime<Local>,
}

/// Keeps the best score in a small JSON file. A missing file reads as 0.
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonScoreStore {
    fn load(&mut self) -> Result<u32> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read score file: {:?}", self.path))
            }
        };

        let record: BestScoreRecord = serde_json::from_str(&contents)
            .with_context(|| format!("Corrupt score file: {:?}", self.path))?;
        Ok(record.best_score)
    }

    fn save(&mut self, best_score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        let record = BestScoreRecord {
            best_score,
            updated_at: Local::now(),
        };
        let json = serde_json::to_string_pretty(&record)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write score file: {:?}", self.path))
    }
}

/// In-process store, used by tests and when persistence is not wanted.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    pub best_score: u32,
    /// Every value passed to `save`, in order
    pub writes: Vec<u32>,
}

impl MemoryScoreStore {
    pub fn with_best(best_score: u32) -> Self {
        Self {
            best_score,
            writes: Vec::new(),
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&mut self) -> Result<u32> {
        Ok(self.best_score)
    }

    fn save(&mut self, best_score: u32) -> Result<()> {
        self.best_score = best_score;
        self.writes.push(best_score);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_zero() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonScoreStore::new(dir.path().join("high_score.json"));
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("high_score.json");

        JsonScoreStore::new(&path).save(120).unwrap();
        let mut store = JsonScoreStore::new(&path);
        assert_eq!(store.load().unwrap(), 120);

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"best_score\": 120"));
        assert!(raw.contains("updated_at"));
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("high_score.json");
        fs::write(&path, "not json").unwrap();

        assert!(JsonScoreStore::new(&path).load().is_err());
    }

    #[test]
    fn test_memory_store_records_writes() {
        let mut store = MemoryScoreStore::with_best(30);
        assert_eq!(store.load().unwrap(), 30);
        store.save(40).unwrap();
        assert_eq!(store.writes, vec![40]);
        assert_eq!(store.load().unwrap(), 40);
    }
}
