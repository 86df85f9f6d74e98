// crates/ports/src/backup.rs
use std::path::{Path, PathBuf};

use marker_tally_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Record of a completed backup copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupReceipt {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bytes: u64,
}

/// Port for taking a byte-identical copy of a file before it is scanned.
pub trait BackupStore {
    fn backup(&self, source: &Path, destination: &Path) -> Result<BackupReceipt>;
}
