//! Append-only activity logger
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{AllotError, AllotResult};

use super::entry::ActivityEntry;

/// Writes activity entries to a JSONL file
#[derive(Debug, Clone)]
pub struct ActivityLogger {
    log_path: PathBuf,
}

impl ActivityLogger {
    /// Create a logger that appends to `log_path`
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry
    pub fn log(&self, entry: &ActivityEntry) -> AllotResult<()> {
        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AllotError::Io(format!("Failed to create activity log directory: {}", e))
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| AllotError::Io(format!("Failed to open activity log: {}", e)))?;

        let json = serde_json::to_string(entry).map_err(|e| {
            AllotError::Json(format!("Failed to serialize activity entry: {}", e))
        })?;

        writeln!(file, "{}", json)
            .map_err(|e| AllotError::Io(format!("Failed to write activity entry: {}", e)))?;

        file.flush()
            .map_err(|e| AllotError::Io(format!("Failed to flush activity log: {}", e)))?;

        Ok(())
    }

    /// Read every entry, oldest first
    pub fn read_all(&self) -> AllotResult<Vec<ActivityEntry>> {
        self.read_recent(usize::MAX)
    }

    /// Read the most recent `count` entries, oldest first
    ///
    /// Streams the file and keeps only the last `count` lines in memory.
    pub fn read_recent(&self, count: usize) -> AllotResult<Vec<ActivityEntry>> {
        if count == 0 || !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| AllotError::Io(format!("Failed to open activity log: {}", e)))?;

        let mut tail: VecDeque<(usize, String)> = VecDeque::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                AllotError::Io(format!(
                    "Failed to read activity log line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            if tail.len() == count {
                tail.pop_front();
            }
            tail.push_back((line_num + 1, line));
        }

        tail.into_iter()
            .map(|(line_num, line)| {
                serde_json::from_str(&line).map_err(|e| {
                    AllotError::Json(format!(
                        "Failed to parse activity entry at line {}: {}",
                        line_num, e
                    ))
                })
            })
            .collect()
    }

    /// Check if the log file exists
    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// Path to the log file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}
