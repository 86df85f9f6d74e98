use chrono::Local;
use marker_tally_ports::{
    backup::BackupStore,
    scanner::{LineScanner, ScanPlan, ScanSummary},
};
use marker_tally_shared_kernel::{ApplicationError, MarkerTallyError, error::render_chain};

use crate::dto::{PairReport, Problem, Stage, TallyReport, TallyRequest};

/// Backs up the input, scans it once and reports every configured pair.
///
/// Step failures are collected in [`TallyReport::problems`]; the run itself
/// always produces a report.
pub struct TallyMarkers<'a> {
    scanner: &'a dyn LineScanner,
    backups: &'a dyn BackupStore,
}

impl<'a> TallyMarkers<'a> {
    pub fn new(scanner: &'a dyn LineScanner, backups: &'a dyn BackupStore) -> Self {
        Self { scanner, backups }
    }

    pub fn run(&self, request: &TallyRequest) -> TallyReport {
        let started_at = Local::now();
        let mut problems = Vec::new();

        let backup = request.backup.as_deref().and_then(|destination| {
            match self.backups.backup(&request.input, destination) {
                Ok(receipt) => Some(receipt),
                Err(source) => {
                    let err = ApplicationError::BackupFailed {
                        path: request.input.clone(),
                        source: Box::new(source),
                    };
                    problems.push(problem(Stage::Backup, err));
                    None
                }
            }
        });

        let plan = ScanPlan {
            path: request.input.clone(),
            markers: request.pairs.iter().flat_map(|p| [p.start.clone(), p.end.clone()]).collect(),
        };
        let summary = self.scanner.scan(&plan).unwrap_or_else(|source| {
            let err = ApplicationError::ScanFailed { path: request.input.clone(), source: Box::new(source) };
            problems.push(problem(Stage::Scan, err));
            ScanSummary::default()
        });
        tracing::debug!(total_lines = summary.total_lines.value(), "scan finished");

        let count_at = |i: usize| summary.matches.get(i).copied().unwrap_or_default();
        let pairs = request
            .pairs
            .iter()
            .enumerate()
            .map(|(i, pair)| PairReport::new(pair, count_at(2 * i), count_at(2 * i + 1)))
            .collect();

        TallyReport {
            input: request.input.clone(),
            started_at,
            backup,
            total_lines: summary.total_lines,
            pairs,
            problems,
        }
    }
}

fn problem(stage: Stage, err: ApplicationError) -> Problem {
    let err = MarkerTallyError::from(err);
    let message = render_chain(&err);
    tracing::warn!(?stage, "{message}");
    Problem { stage, message }
}
