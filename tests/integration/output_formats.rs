// tests/integration/output_formats.rs
use marker_tally::{
    app,
    config::{Config, OutputFormat},
    presentation,
};

use crate::common::TempWorkspace;

fn tallied(ws: &TempWorkspace, log: &str) -> marker_tally_usecase::TallyReport {
    let input = ws.write_file("out.txt", log);
    app::tally(&Config { input, backup: None, ..Config::default() })
}

#[test]
fn text_output_matches_classic_layout() {
    let ws = TempWorkspace::new("fmt_text");
    let report = tallied(&ws, "starting\nasdasd_end\n");

    let text = presentation::render(&report, OutputFormat::Text).unwrap();

    assert_eq!(text.lines().count(), 4);
    assert_eq!(
        text,
        "starting: 1, fininini: 0\ndifference: 1\nasdasd_start: 0, asdasd_end: 1\ndifference: -1\n"
    );
}

#[test]
fn json_and_yaml_agree() {
    let ws = TempWorkspace::new("fmt_structured");
    let report = tallied(&ws, "starting\nstarting\nfininini\n");

    let json: serde_json::Value =
        serde_json::from_str(&presentation::render(&report, OutputFormat::Json).unwrap()).unwrap();
    let yaml: serde_json::Value =
        serde_yaml::from_str(&presentation::render(&report, OutputFormat::Yaml).unwrap()).unwrap();

    assert_eq!(json["pairs"], yaml["pairs"]);
    assert_eq!(json["pairs"][0]["start_count"], 2);
    assert_eq!(json["pairs"][0]["end_count"], 1);
    assert_eq!(json["total_lines"], 3);
    assert!(json["started_at"].is_string());
}
