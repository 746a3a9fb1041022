//! File-backed statistics persistence.

use std::borrow::Cow;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

use crate::core::{config::DEFAULT_STATS_FILE, stats::StatisticsRecord};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid statistics record: {0}")]
    Invalid(&'static str),
}

/// Reads and writes a single [`StatisticsRecord`] as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file a save is staged in: the target name with `.tmp` appended.
    pub fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Load the stored record, falling back to the default record when the
    /// file is missing or cannot be used. Never fails.
    pub fn load(&self) -> StatisticsRecord {
        match self.try_load() {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!("no statistics at {}, starting fresh", self.path.display());
                StatisticsRecord::default()
            }
            Err(e) => {
                warn!(
                    "Could not load statistics from {}: {}",
                    self.path.display(),
                    e
                );
                StatisticsRecord::default()
            }
        }
    }

    /// Load the stored record. `Ok(None)` means no file exists yet.
    pub fn try_load(&self) -> Result<Option<StatisticsRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let record: StatisticsRecord = serde_json::from_str(&non_finite_to_null(&content))?;
        record.validate().map_err(StoreError::Invalid)?;
        Ok(Some(record))
    }

    /// Persist `record`, replacing the previous file atomically.
    ///
    /// The record is written to a sibling temporary file and renamed over the
    /// target, so a failure at any point leaves the last good file in place.
    pub fn save(&self, record: &StatisticsRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut content = serde_json::to_string_pretty(record)?;
        content.push('\n');

        let temp_path = self.temp_path();
        let written = File::create(&temp_path).and_then(|mut file| {
            file.write_all(content.as_bytes())?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|()| fs::rename(&temp_path, &self.path)) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }
        debug!("statistics saved to {}", self.path.display());
        Ok(())
    }
}

impl Default for StatsStore {
    fn default() -> Self {
        Self::new(DEFAULT_STATS_FILE)
    }
}

/// Replaces bare `Infinity`, `-Infinity` and `NaN` literals outside strings
/// with `null`. Older stats files store an unset best score this way.
fn non_finite_to_null(content: &str) -> Cow<'_, str> {
    if !content.contains("Infinity") && !content.contains("NaN") {
        return Cow::Borrowed(content);
    }

    let mut out = String::with_capacity(content.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut rest = content;
    while let Some(ch) = rest.chars().next() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
        } else if ch == '"' {
            in_string = true;
        } else if let Some(literal) = ["-Infinity", "Infinity", "NaN"]
            .into_iter()
            .find(|literal| rest.starts_with(literal))
        {
            out.push_str("null");
            rest = &rest[literal.len()..];
            continue;
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    Cow::Owned(out)
}
