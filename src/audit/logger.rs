//! History of budget changes
//!
//! The log behind `budget history`. Income updates, expense edits and store
//! clears land here as one JSON object per line, in the order they happened.
//! The file is only ever appended to; a line that fails to parse is reported
//! with its line number instead of being skipped.

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{BudgetError, BudgetResult};

use super::entry::AuditEntry;

#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
        }
    }

    /// Record one change
    ///
    /// The entry is serialized before the file is touched, and the line goes
    /// out in a single write.
    pub fn log(&self, entry: &AuditEntry) -> BudgetResult<()> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                BudgetError::Io(format!(
                    "Cannot open history {}: {}",
                    self.log_path.display(),
                    e
                ))
            })?;

        file.write_all(line.as_bytes())
            .map_err(|e| BudgetError::Io(format!("Cannot record change: {}", e)))
    }

    /// Every recorded change, oldest first
    pub fn read_all(&self) -> BudgetResult<Vec<AuditEntry>> {
        let mut entries = Vec::new();
        self.for_each_entry(|entry| entries.push(entry))?;
        Ok(entries)
    }

    /// The last `count` changes, oldest first
    pub fn read_recent(&self, count: usize) -> BudgetResult<Vec<AuditEntry>> {
        let mut recent = VecDeque::with_capacity(count);
        self.for_each_entry(|entry| {
            if count == 0 {
                return;
            }
            if recent.len() == count {
                recent.pop_front();
            }
            recent.push_back(entry);
        })?;
        Ok(recent.into())
    }

    fn for_each_entry<F>(&self, mut visit: F) -> BudgetResult<()>
    where
        F: FnMut(AuditEntry),
    {
        // nothing recorded yet
        if !self.log_path.exists() {
            return Ok(());
        }

        let file = File::open(&self.log_path).map_err(|e| {
            BudgetError::Io(format!(
                "Cannot open history {}: {}",
                self.log_path.display(),
                e
            ))
        })?;

        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|e| {
                BudgetError::Io(format!("Cannot read history line {}: {}", line_number, e))
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let entry = serde_json::from_str(&line).map_err(|e| {
                BudgetError::Json(format!("Bad history entry on line {}: {}", line_number, e))
            })?;
            visit(entry);
        }

        Ok(())
    }
}
