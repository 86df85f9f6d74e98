// src/presentation.rs
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use marker_tally_shared_kernel::{ErrorContext, InfrastructureError, Result};
use marker_tally_usecase::{PairReport, TallyReport};

use crate::config::OutputFormat;

/// Write `report` in `format` to `out`.
pub fn write_report<W: Write>(report: &TallyReport, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(&report.pairs, out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(report)?;
            out.write_all(yaml.as_bytes())?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Two lines per pair: both counts, then their difference.
fn write_text<W: Write>(pairs: &[PairReport], out: &mut W) -> io::Result<()> {
    for pair in pairs {
        writeln!(out, "{}: {}, {}: {}", pair.start, pair.start_count, pair.end, pair.end_count)?;
        writeln!(out, "difference: {}", pair.difference)?;
    }
    Ok(())
}

/// Emit to `path` when given, otherwise to standard output.
pub fn emit(report: &TallyReport, format: OutputFormat, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| InfrastructureError::OutputError {
                message: format!("cannot create '{}'", path.display()),
                source: Some(Box::new(source)),
            })?;
            let mut writer = BufWriter::new(file);
            write_report(report, format, &mut writer)
                .with_context(|| format!("writing report to '{}'", path.display()))
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_report(report, format, &mut writer)
        }
    }
}

/// Render to a string; convenient for tests and embedding.
pub fn render(report: &TallyReport, format: OutputFormat) -> Result<String> {
    let mut buf = Vec::new();
    write_report(report, format, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
