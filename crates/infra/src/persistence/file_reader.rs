// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::BufReader,
    path::Path,
};

use marker_tally_shared_kernel::InfrastructureError;

/// Buffer size used for line scanning; log lines are short but files are long.
const READ_BUFFER_BYTES: usize = 64 * 1024;

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> Result<File, InfrastructureError> {
        File::open(path).map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> Result<BufReader<File>, InfrastructureError> {
        Self::open(path).map(|file| BufReader::with_capacity(READ_BUFFER_BYTES, file))
    }
}
