use std::path::Path;

use cogex_core::{ExtensionReader, ResponseTable, Result, TableReader};
use tracing::{debug, info};

use crate::config::ResponseLogConfig;

/// State of a response log on disk.
#[derive(Debug, Clone, PartialEq)]
pub enum ResumePoint {
    /// No log exists yet; start a fresh session.
    Absent,
    /// Every trial has a response; the log must not be overwritten.
    Finished,
    /// The session was interrupted. `row` is one past the first trial without
    /// a response.
    Resume { table: ResponseTable, row: usize },
}

impl ResumePoint {
    pub fn status(&self) -> &'static str {
        match self {
            ResumePoint::Absent => "absent",
            ResumePoint::Finished => "finished",
            ResumePoint::Resume { .. } => "resume",
        }
    }
}

/// Decides whether data collection for `dir/file` starts, resumes or is done.
///
/// The configured integer columns are normalized to nullable integers, then
/// the first column (by position) is checked for missing values. Read and
/// schema failures are returned as errors; a missing file is not one.
pub fn continue_log(
    dir: &Path,
    file: &str,
    reader: &dyn TableReader,
    config: &ResponseLogConfig,
) -> Result<ResumePoint> {
    let path = dir.join(file);
    if !path.is_file() {
        debug!(path = %path.display(), "no response log");
        return Ok(ResumePoint::Absent);
    }

    let mut table = reader.open(&path)?;
    table.normalize_integers(&config.integer_columns)?;

    let point = match table.first_incomplete_row() {
        None => ResumePoint::Finished,
        Some(first) => ResumePoint::Resume {
            table,
            row: first + 1,
        },
    };
    match &point {
        ResumePoint::Resume { row, table } => {
            info!(path = %path.display(), row, rows = table.n_rows(), "resuming response log")
        }
        other => info!(path = %path.display(), status = other.status(), "response log checked"),
    }
    Ok(point)
}

/// [`continue_log`] with the reader chosen from the file extension.
pub fn continue_log_auto(dir: &Path, file: &str, config: &ResponseLogConfig) -> Result<ResumePoint> {
    continue_log(dir, file, &ExtensionReader, config)
}
