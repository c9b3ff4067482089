//! History of manuscript updates
//!
//! Records which substitutions each run applied and the values it used.

use crate::error::{Error, Result};
use crate::values::ValueMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A record of one run that wrote the manuscript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// When the manuscript was written
    pub timestamp: DateTime<Utc>,
    /// Manuscript that was updated
    pub manuscript: PathBuf,
    /// Where the pre-edit text was saved
    pub backup: PathBuf,
    /// Labels of substitutions applied
    pub applied: Vec<String>,
    /// Labels of substitutions whose sentence was absent
    pub skipped: Vec<String>,
    /// Every value extracted for the run
    pub values: ValueMap,
}

/// History file containing all recorded runs, oldest first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HistoryFile {
    pub runs: Vec<RunRecord>,
}

impl HistoryFile {
    /// Create a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Load history from a file, or create empty if not exists
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(Error::Json)
    }

    /// Save history to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), content).map_err(|e| Error::FileWrite {
            path: path.as_ref().to_path_buf(),
            source: e,
        })
    }

    pub fn add_run(&mut self, run: RunRecord) {
        self.runs.push(run);
    }

    /// Most recent run
    pub fn last_run(&self) -> Option<&RunRecord> {
        self.runs.last()
    }

    pub fn total_runs(&self) -> usize {
        self.runs.len()
    }
}

/// Create a run record stamped with the current time
pub fn create_run_record(
    manuscript: &Path,
    backup: &Path,
    applied: &[&str],
    skipped: &[&str],
    values: &ValueMap,
) -> RunRecord {
    RunRecord {
        timestamp: Utc::now(),
        manuscript: manuscript.to_path_buf(),
        backup: backup.to_path_buf(),
        applied: applied.iter().map(|s| s.to_string()).collect(),
        skipped: skipped.iter().map(|s| s.to_string()).collect(),
        values: values.clone(),
    }
}

/// Append a run to the history at `path`, creating the file if needed
pub fn append_run<P: AsRef<Path>>(path: P, run: RunRecord) -> Result<()> {
    let path = path.as_ref();
    let mut history = HistoryFile::load(path)?;
    history.add_run(run);
    history.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record() -> RunRecord {
        let mut values = ValueMap::new();
        values.insert("HUMAN_UNIVERSAL", 50_i64);
        create_run_record(
            Path::new("paper.txt"),
            Path::new("paper.txt.backup"),
            &["Figure 1 gene counts"],
            &["PacBio cosine similarity"],
            &values,
        )
    }

    #[test]
    fn test_load_missing_is_empty() {
        let dir = TempDir::new().unwrap();
        let history = HistoryFile::load(dir.path().join("history.json")).unwrap();
        assert_eq!(history.total_runs(), 0);
        assert!(history.last_run().is_none());
    }

    #[test]
    fn test_append_runs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");

        append_run(&path, record()).unwrap();
        append_run(&path, record()).unwrap();

        let history = HistoryFile::load(&path).unwrap();
        assert_eq!(history.total_runs(), 2);
        let last = history.last_run().unwrap();
        assert_eq!(last.applied, vec!["Figure 1 gene counts".to_string()]);
        assert_eq!(last.values.len(), 1);
    }

    #[test]
    fn test_save_error_carries_path() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("missing/history.json");

        match append_run(&target, record()) {
            Err(Error::FileWrite { path, .. }) => assert_eq!(path, target),
            other => panic!("expected FileWrite, got {:?}", other),
        }
    }
}
