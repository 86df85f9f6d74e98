// crates/ports/src/scanner.rs
use std::path::PathBuf;

use marker_tally_shared_kernel::{LineCount, Marker, Result};
use serde::{Deserialize, Serialize};

/// What to scan and which markers to look for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanPlan {
    pub path: PathBuf,
    pub markers: Vec<Marker>,
}

/// Result of one pass over a file.
///
/// `matches[i]` is the number of lines containing `plan.markers[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub total_lines: LineCount,
    pub matches: Vec<LineCount>,
}

/// Port for counting lines that contain literal markers.
pub trait LineScanner {
    fn scan(&self, plan: &ScanPlan) -> Result<ScanSummary>;
}
