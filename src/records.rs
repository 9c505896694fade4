//! Best score / best distance records
//!
//! Stored as two `key=value` lines:
//!
//! ```text
//! score=12
//! distance=3400
//! ```
//!
//! A missing or damaged file is never an error for the game: it just means
//! there is no record yet.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default records file, relative to the working directory
pub const RECORDS_FILE: &str = "records.txt";

#[derive(Debug, Error)]
pub enum RecordsError {
    #[error("records file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("records file has no `{0}` entry")]
    MissingField(&'static str),
    #[error("records entry `{key}` has a bad value `{value}`")]
    BadValue { key: String, value: String },
}

/// Best results across all runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Records {
    pub best_score: u32,
    pub best_distance: u32,
}

impl Records {
    /// Whether a finished run beats either record
    pub fn is_new_best(&self, score: u32, distance: u32) -> bool {
        score > self.best_score || distance > self.best_distance
    }

    /// Fold a run into the records; returns true if anything improved
    pub fn update(&mut self, score: u32, distance: u32) -> bool {
        if !self.is_new_best(score, distance) {
            return false;
        }
        self.best_score = self.best_score.max(score);
        self.best_distance = self.best_distance.max(distance);
        true
    }

    /// Parse the `key=value` text format
    ///
    /// The first line is the score and the second the distance; each line's
    /// value is whatever follows the first `=`. A line that is absent counts
    /// as zero.
    pub fn parse(text: &str) -> Result<Self, RecordsError> {
        let mut lines = text.lines();
        let best_score = parse_line(lines.next(), "score")?;
        let best_distance = parse_line(lines.next(), "distance")?;
        Ok(Self {
            best_score,
            best_distance,
        })
    }

    pub fn to_text(&self) -> String {
        format!(
            "score={}\ndistance={}\n",
            self.best_score, self.best_distance
        )
    }
}

fn parse_line(line: Option<&str>, key: &'static str) -> Result<u32, RecordsError> {
    let Some(line) = line else {
        return Ok(0);
    };
    let value = line
        .split_once('=')
        .map(|(_, v)| v.trim())
        .ok_or(RecordsError::MissingField(key))?;
    value.parse().map_err(|_| RecordsError::BadValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Where records live between launches
pub trait RecordStore {
    /// Load records; any failure yields the default zero records
    fn load(&self) -> Records;
    /// Overwrite the stored records
    fn save(&mut self, records: &Records) -> Result<(), RecordsError>;
}

/// Records in a text file
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    pub path: PathBuf,
}

impl FileRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn try_load(&self) -> Result<Records, RecordsError> {
        let text = fs::read_to_string(&self.path)?;
        Records::parse(&text)
    }
}

impl Default for FileRecordStore {
    fn default() -> Self {
        Self::new(RECORDS_FILE)
    }
}

impl RecordStore for FileRecordStore {
    fn load(&self) -> Records {
        if !self.path.exists() {
            log::info!("No records at {}, starting fresh", self.path.display());
            return Records::default();
        }
        match self.try_load() {
            Ok(records) => {
                log::info!(
                    "Loaded records: score {} / distance {}",
                    records.best_score,
                    records.best_distance
                );
                records
            }
            Err(e) => {
                log::warn!("Ignoring records at {}: {}", self.path.display(), e);
                Records::default()
            }
        }
    }

    fn save(&mut self, records: &Records) -> Result<(), RecordsError> {
        fs::write(&self.path, records.to_text())?;
        log::info!("Records saved to {}", self.path.display());
        Ok(())
    }
}

/// Records kept in memory (tests, demo runs)
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    pub records: Records,
    /// Number of successful saves
    pub saves: u32,
}

impl RecordStore for MemoryRecordStore {
    fn load(&self) -> Records {
        self.records
    }

    fn save(&mut self, records: &Records) -> Result<(), RecordsError> {
        self.records = *records;
        self.saves += 1;
        Ok(())
    }
}
