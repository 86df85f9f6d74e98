// crates/infra/src/persistence/file_writer.rs
use std::{
    io::{self, BufWriter, Read, Write},
    path::Path,
};

use tempfile::NamedTempFile;

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Stream `reader` into `path` via a temp file in the same directory and rename.
    ///
    /// `path` is only replaced once every byte has been written, so a failed copy
    /// leaves any previous file at `path` untouched.
    pub fn atomic_copy<R: Read + ?Sized>(reader: &mut R, path: &Path) -> io::Result<u64> {
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(parent)?;
        let bytes = {
            let mut w = BufWriter::new(tmp.as_file_mut());
            let bytes = io::copy(reader, &mut w)?;
            w.flush()?;
            bytes
        };
        let _ = tmp.as_file().sync_all();

        tmp.persist(path).map_err(|e| e.error)?;
        Ok(bytes)
    }
}
