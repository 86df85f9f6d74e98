// tests/integration/end_to_end.rs
use std::path::PathBuf;

use marker_tally::{app, config::Config};
use marker_tally_shared_kernel::MarkerPair;
use marker_tally_usecase::Stage;
use proptest::prelude::*;

use crate::common::{TempWorkspace, read_bytes, synthetic_log};

fn config_for(ws: &TempWorkspace) -> Config {
    let input = ws.join("out.txt");
    Config {
        backup: Some(marker_tally::config::default_backup_path(&input)),
        input,
        ..Config::default()
    }
}

#[test]
fn tally_counts_both_default_pairs() {
    let ws = TempWorkspace::new("e2e");
    let mut log = synthetic_log("starting", 7, "fininini", 4);
    log.push_str(&synthetic_log("asdasd_start", 2, "asdasd_end", 2));
    ws.write_file("out.txt", &log);

    let report = app::tally(&config_for(&ws));

    assert!(report.is_clean());
    assert_eq!(report.pairs[0].start_count.value(), 7);
    assert_eq!(report.pairs[0].end_count.value(), 4);
    assert_eq!(report.pairs[0].difference.value(), 3);
    assert_eq!(report.pairs[1].difference.value(), 0);
    assert_eq!(report.total_lines.value(), log.lines().count());
}

#[test]
fn backup_matches_input_at_copy_time() {
    let ws = TempWorkspace::new("e2e_backup");
    let input = ws.write_file("out.txt", b"starting\r\n\x00\xffraw\nfininini".as_slice());

    let report = app::tally(&config_for(&ws));

    let receipt = report.backup.expect("backup taken");
    assert_eq!(receipt.destination, PathBuf::from(format!("{}.bak", input.display())));
    assert_eq!(read_bytes(&receipt.destination), read_bytes(&input));
}

#[test]
fn missing_input_records_backup_and_scan_problems() {
    let ws = TempWorkspace::new("e2e_missing");

    let report = app::tally(&config_for(&ws));

    let stages: Vec<Stage> = report.problems.iter().map(|p| p.stage).collect();
    assert_eq!(stages, vec![Stage::Backup, Stage::Scan]);
    assert!(report.pairs.iter().all(|p| p.difference.value() == 0));
}

#[test]
fn finished_lines_are_not_counted_for_first_pair() {
    let ws = TempWorkspace::new("e2e_typo");
    ws.write_file("out.txt", synthetic_log("starting", 3, "finished", 3));

    let report = app::tally(&config_for(&ws));

    assert_eq!(report.pairs[0].end_count.value(), 0);
    assert_eq!(report.pairs[0].difference.value(), 3);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn difference_equals_n_minus_m(n in 0usize..200, m in 0usize..200) {
        let ws = TempWorkspace::new("e2e_prop");
        ws.write_file("out.txt", synthetic_log("starting", n, "fininini", m));
        let config = Config { pairs: vec![MarkerPair::defaults().remove(0)], backup: None, ..config_for(&ws) };

        let report = app::tally(&config);

        prop_assert_eq!(report.pairs[0].start_count.value(), n);
        prop_assert_eq!(report.pairs[0].end_count.value(), m);
        prop_assert_eq!(report.pairs[0].difference.value(), n as i64 - m as i64);
    }
}
