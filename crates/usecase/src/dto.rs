use std::path::PathBuf;

use chrono::{DateTime, Local};
use marker_tally_ports::backup::BackupReceipt;
use marker_tally_shared_kernel::{Difference, LineCount, Marker, MarkerPair};
use serde::Serialize;

/// Input to [`crate::TallyMarkers::run`].
#[derive(Debug, Clone)]
pub struct TallyRequest {
    pub input: PathBuf,
    /// `None` skips the backup step.
    pub backup: Option<PathBuf>,
    pub pairs: Vec<MarkerPair>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairReport {
    pub start: Marker,
    pub start_count: LineCount,
    pub end: Marker,
    pub end_count: LineCount,
    pub difference: Difference,
}

impl PairReport {
    pub fn new(pair: &MarkerPair, start_count: LineCount, end_count: LineCount) -> Self {
        Self {
            start: pair.start.clone(),
            start_count,
            end: pair.end.clone(),
            end_count,
            difference: start_count.difference(end_count),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Backup,
    Scan,
}

/// A step that failed without stopping the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub stage: Stage,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TallyReport {
    pub input: PathBuf,
    pub started_at: DateTime<Local>,
    pub backup: Option<BackupReceipt>,
    pub total_lines: LineCount,
    pub pairs: Vec<PairReport>,
    pub problems: Vec<Problem>,
}

impl TallyReport {
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}
