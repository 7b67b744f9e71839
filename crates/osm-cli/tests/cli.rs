//! Integration tests for argument parsing and the command runners.

use std::path::{Path, PathBuf};

use clap::Parser;
use osm_cli::cli::{AuditArgs, AuditCommand, Cli, Command, LoadArgs, SinkArg};
use osm_cli::commands::{default_output_path, run_audit, run_load, sink_config};
use osm_cli::summary::{audit_table, load_summary_table, rules_table};
use osm_output::{DocumentStore, SinkConfig};
use tempfile::TempDir;

const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6">
  <node id="1" lat="28.5" lon="-81.3" user="mapper">
    <tag k="addr:street" v="123 Test Rd"/>
    <tag k="addr:city" v="orlando_fl"/>
    <tag k="fee" v="None"/>
  </node>
  <way id="2">
    <nd ref="1"/>
    <tag k="oneway" v="-1"/>
    <tag k="addr:street" v="US 441 Hwy"/>
  </way>
</osm>"#;

fn write_sample(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("orlando.osm");
    std::fs::write(&path, SAMPLE).unwrap();
    path
}

fn load_args(input: &Path, sink: SinkArg, output: Option<PathBuf>) -> LoadArgs {
    LoadArgs {
        input: input.to_path_buf(),
        sink,
        output,
        collection: "orangecounty".to_string(),
    }
}

#[test]
fn parses_load_with_defaults() {
    let cli = Cli::try_parse_from(["osm-clean", "load", "map.osm"]).unwrap();
    let Command::Load(args) = cli.command else {
        panic!("expected load command");
    };
    assert_eq!(args.sink, SinkArg::Json);
    assert_eq!(args.collection, "orangecounty");
    assert!(args.output.is_none());
}

#[test]
fn parses_audit_variants() {
    let cli = Cli::try_parse_from([
        "osm-clean",
        "audit",
        "map.osm",
        "suspicious",
        "--literal",
        "n/a",
        "--literal",
        "null",
    ])
    .unwrap();
    let Command::Audit(args) = cli.command else {
        panic!("expected audit command");
    };
    assert_eq!(
        args.variant,
        AuditCommand::Suspicious {
            literals: vec!["n/a".to_string(), "null".to_string()]
        }
    );

    let cli = Cli::try_parse_from(["osm-clean", "audit", "map.osm", "names", "--all"]).unwrap();
    let Command::Audit(args) = cli.command else {
        panic!("expected audit command");
    };
    assert_eq!(args.variant, AuditCommand::Names { all: true });
}

#[test]
fn value_audits_require_a_key() {
    assert!(Cli::try_parse_from(["osm-clean", "audit", "map.osm", "value-set"]).is_err());
}

#[test]
fn default_output_follows_input_name() {
    assert_eq!(
        default_output_path(Path::new("data/orlando.osm"), SinkArg::Json),
        PathBuf::from("data/orlando.json")
    );
    assert_eq!(
        default_output_path(Path::new("orlando.osm"), SinkArg::Store),
        PathBuf::from("orlando.db")
    );
}

#[test]
fn store_sink_config_carries_collection() {
    let mut args = load_args(Path::new("orlando.osm"), SinkArg::Store, None);
    args.collection = "osm".to_string();
    assert_eq!(
        sink_config(&args),
        SinkConfig::Store {
            path: PathBuf::from("orlando.db"),
            collection: "osm".to_string(),
        }
    );
}

#[test]
fn load_to_json_file() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir);
    let summary = run_load(&load_args(&input, SinkArg::Json, None)).unwrap();

    assert_eq!(summary.sink.records, 2);
    let text = std::fs::read_to_string(dir.path().join("orlando.json")).unwrap();
    let records: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(records[0]["address"]["street"], "123 Test Road");
    assert_eq!(records[0]["address"]["city"], "Orlando Fl");
    assert_eq!(records[0]["created"]["user"], "mapper");
    assert_eq!(records[1]["oneway"], "no");

    let rendered = load_summary_table(&summary).to_string();
    assert!(rendered.contains("Records written"));
}

#[test]
fn load_to_store() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir);
    let output = dir.path().join("osm.db");
    run_load(&load_args(&input, SinkArg::Store, Some(output.clone()))).unwrap();

    let store = DocumentStore::open(&output, "orangecounty").unwrap();
    assert_eq!(store.count().unwrap(), 2);
    assert_eq!(store.documents().unwrap()[1]["_id"], "2");
}

#[test]
fn load_of_missing_input_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.osm");
    let error = run_load(&load_args(&input, SinkArg::Json, None)).unwrap_err();
    assert!(format!("{error:#}").contains("missing.osm"));
    assert!(!dir.path().join("missing.json").exists());
}

#[test]
fn store_load_of_missing_input_creates_no_database() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.osm");
    let output = dir.path().join("out.db");
    let error = run_load(&load_args(&input, SinkArg::Store, Some(output.clone()))).unwrap_err();
    assert!(format!("{error:#}").contains("missing.osm"));
    assert!(!output.exists());
}

#[test]
fn load_of_unclosed_document_writes_no_json() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("truncated.osm");
    std::fs::write(&input, r#"<osm><node id="1"/>"#).unwrap();
    let output = dir.path().join("truncated.json");
    let error = run_load(&load_args(&input, SinkArg::Json, Some(output.clone()))).unwrap_err();
    assert!(format!("{error:#}").contains("<osm>"));
    assert!(!output.exists());
}

#[test]
fn audit_street_types() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir);
    let report = run_audit(&AuditArgs {
        input,
        variant: AuditCommand::StreetTypes,
    })
    .unwrap();
    assert_eq!(report.rows, [("Hwy".to_string(), "US 441 Hwy".to_string())]);
    assert!(audit_table(&report).to_string().contains("US 441 Hwy"));
}

#[test]
fn audit_suspicious_uses_default_literals() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(&dir);
    let report = run_audit(&AuditArgs {
        input,
        variant: AuditCommand::Suspicious { literals: vec![] },
    })
    .unwrap();
    assert_eq!(report.rows, [("none".to_string(), "1".to_string())]);
}

#[test]
fn rules_table_lists_every_key() {
    let rendered = rules_table().to_string();
    for key in ["addr:street", "phone", "sidewalk", "width"] {
        assert!(rendered.contains(key), "missing {key}");
    }
}
