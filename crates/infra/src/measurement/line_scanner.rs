use std::io::{self, BufRead};

use marker_tally_ports::scanner::{LineScanner, ScanPlan, ScanSummary};
use marker_tally_shared_kernel::{InfrastructureError, LineCount, Marker, Result};
use memchr::memmem::Finder;

use crate::persistence::FileReader;

/// Counts matching lines with one `memmem` finder per marker, in a single pass.
#[derive(Debug, Default)]
pub struct MemmemLineScanner;

impl MemmemLineScanner {
    pub fn new() -> Self {
        Self
    }
}

impl LineScanner for MemmemLineScanner {
    fn scan(&self, plan: &ScanPlan) -> Result<ScanSummary> {
        let reader = FileReader::open_buffered(&plan.path)?;
        let summary = count_markers(reader, &plan.markers)
            .map_err(|source| InfrastructureError::FileRead { path: plan.path.clone(), source })?;
        tracing::debug!(
            path = %plan.path.display(),
            total_lines = summary.total_lines.value(),
            markers = plan.markers.len(),
            "scanned"
        );
        Ok(summary)
    }
}

/// 行単位でマーカーを含む行を数える
///
/// A line is everything up to and including `\n`; a trailing fragment without
/// a newline is still a line. Content is matched as raw bytes, so non UTF-8
/// input is fine. A line containing a marker several times counts once.
pub fn count_markers<R: BufRead>(mut reader: R, markers: &[Marker]) -> io::Result<ScanSummary> {
    let finders: Vec<Finder<'_>> = markers.iter().map(|m| Finder::new(m.as_bytes())).collect();
    let mut matches = vec![LineCount::zero(); markers.len()];
    let mut total_lines = LineCount::zero();

    let mut line = Vec::with_capacity(256);
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        total_lines.increment();

        let body = line.strip_suffix(b"\n").unwrap_or(&line[..]);
        for (finder, count) in finders.iter().zip(matches.iter_mut()) {
            if finder.find(body).is_some() {
                count.increment();
            }
        }
    }

    Ok(ScanSummary { total_lines, matches })
}
