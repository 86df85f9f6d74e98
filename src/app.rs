// src/app.rs
use std::process::ExitCode;

use anyhow::{Context, Result};
use marker_tally_infra::{FsBackupStore, MemmemLineScanner};
use marker_tally_usecase::{TallyMarkers, TallyReport, TallyRequest};

use crate::{config::Config, presentation};

/// Back up, scan and tally with the filesystem adapters.
pub fn tally(config: &Config) -> TallyReport {
    let scanner = MemmemLineScanner::new();
    let backups = FsBackupStore::new();
    let request = TallyRequest {
        input: config.input.clone(),
        backup: config.backup.clone(),
        pairs: config.pairs.clone(),
    };
    TallyMarkers::new(&scanner, &backups).run(&request)
}

/// Run once and emit the report.
///
/// Step failures never change the exit code unless `strict` is set.
pub fn run(config: &Config) -> Result<ExitCode> {
    let report = tally(config);

    if let Err(err) = presentation::emit(&report, config.format, config.output.as_deref()) {
        if config.strict {
            return Err(err).context("failed to emit report");
        }
        tracing::error!("{err}");
    }

    if config.strict && !report.is_clean() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
