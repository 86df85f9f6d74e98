// crates/infra/src/backup.rs
use std::{fs::File, io, path::Path};

use marker_tally_ports::backup::{BackupReceipt, BackupStore};
use marker_tally_shared_kernel::{InfrastructureError, Result};

use crate::persistence::{FileReader, FileWriter};

/// Copies the input next to itself before it is scanned.
///
/// The source is held under an advisory shared lock during the copy where the
/// platform allows it, so cooperating writers cannot interleave with the snapshot.
#[derive(Debug, Default)]
pub struct FsBackupStore;

impl FsBackupStore {
    pub fn new() -> Self {
        Self
    }
}

impl BackupStore for FsBackupStore {
    fn backup(&self, source: &Path, destination: &Path) -> Result<BackupReceipt> {
        let copy_err = |source_err: io::Error| InfrastructureError::FileCopy {
            from: source.to_path_buf(),
            to: destination.to_path_buf(),
            source: source_err,
        };

        let mut input = FileReader::open(source)?;
        let is_file = input.metadata().map_err(copy_err)?.is_file();
        if !is_file {
            return Err(copy_err(io::Error::new(io::ErrorKind::InvalidInput, "input is not a regular file")).into());
        }
        // Hard links and symlinks count: the destination must not alias the input.
        if same_file::is_same_file(source, destination).unwrap_or(false) {
            return Err(copy_err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "backup destination is the input file",
            ))
            .into());
        }

        tracing::info!(from = %source.display(), to = %destination.display(), "backing up");
        let locked = lock_shared(&input, source);
        let copied = FileWriter::atomic_copy(&mut input, destination).map_err(copy_err);
        if locked {
            let _ = fs2::FileExt::unlock(&input);
        }
        let bytes = copied?;

        tracing::info!(bytes, "backup written");
        Ok(BackupReceipt { source: source.to_path_buf(), destination: destination.to_path_buf(), bytes })
    }
}

fn lock_shared(file: &File, path: &Path) -> bool {
    match fs2::FileExt::try_lock_shared(file) {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "shared lock unavailable, copying unlocked");
            false
        }
    }
}
