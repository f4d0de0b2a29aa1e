//! Integration tests for hsq CLI.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const SNAPSHOT: &str = r#"{
    "items": [
        { "name": "Iron Bar", "in_stack": 0 },
        { "name": "Bronze Bar", "in_stack": 0 },
        { "name": "Copper Bar", "in_stack": 0 },
        { "name": "Sack", "holds_stack": 1 },
        { "name": "Pipe", "in_stack": 1, "curiosity": { "exp": 150, "lph": 3 } },
        { "name": "Steak", "food": { "events": [ { "name": "Strength", "amount": 40 }, { "name": "Agility", "amount": 15 } ] } },
        { "name": "Bucket", "content": { "name": "Water", "count": 10, "quality": 42 } }
    ],
    "stacks": [ { "members": [0, 1, 2] }, { "members": [4] } ]
}"#;

fn hsq_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hsq"));
    cmd.env("SEEK_CONFIG", config_dir.join("config.toml"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_snapshot(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn run_match(tmp: &TempDir, query: &str, extra: &[&str]) -> Output {
    let snapshot = write_snapshot(tmp.path(), "bag.json", SNAPSHOT);
    hsq_cmd(tmp.path())
        .args(["match", query, "-i"])
        .arg(&snapshot)
        .args(extra)
        .output()
        .expect("failed to run hsq match")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_parse_canonical_form() {
    let tmp = TempDir::new().unwrap();
    let output = hsq_cmd(tmp.path())
        .args(["parse", "study:>100"])
        .output()
        .expect("failed to run hsq parse");

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "property: lp:>100");
}

#[test]
fn test_parse_name_fallback() {
    let tmp = TempDir::new().unwrap();
    let output = hsq_cmd(tmp.path())
        .args(["parse", "XYZ:5"])
        .output()
        .expect("failed to run hsq parse");

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "name: xyz:5");
}

#[test]
fn test_parse_flags_unrecognized_operator() {
    let tmp = TempDir::new().unwrap();
    let output = hsq_cmd(tmp.path())
        .args(["parse", "lp:=>5"])
        .output()
        .expect("failed to run hsq parse");

    assert!(output.status.success());
    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(lines[0], "property: lp:5");
    assert_eq!(lines[1], "(operator not recognized, comparing for equality)");
}

#[test]
fn test_parse_plain_number_has_no_operator_note() {
    let tmp = TempDir::new().unwrap();
    let output = hsq_cmd(tmp.path())
        .args(["parse", "lp:5"])
        .output()
        .expect("failed to run hsq parse");

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "property: lp:5");
}

#[test]
fn test_parse_json() {
    let tmp = TempDir::new().unwrap();
    let output = hsq_cmd(tmp.path())
        .args(["parse", "fep:str", "--format", "json"])
        .output()
        .expect("failed to run hsq parse");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["kind"], "property");
    assert_eq!(value["property"], "food_energy");
    assert_eq!(value["filter"]["type"], "type");
    assert_eq!(value["filter"]["name"], "str");
}

#[test]
fn test_match_open_stack_highlights_all_members() {
    let tmp = TempDir::new().unwrap();
    let output = run_match(&tmp, "bronze", &["--format", "json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let ids: Vec<u64> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![0, 1, 2]);
}

#[test]
fn test_match_direct_ignores_stacks() {
    let tmp = TempDir::new().unwrap();
    let output = run_match(&tmp, "bronze", &["--direct", "--format", "json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["name"], "Bronze Bar");
}

#[test]
fn test_match_closed_container() {
    let tmp = TempDir::new().unwrap();
    let output = run_match(&tmp, "lp:>100", &[]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Sack"));
    assert!(out.contains("Pipe"));
    assert!(!out.contains("Steak"));
}

#[test]
fn test_match_food_total() {
    let tmp = TempDir::new().unwrap();
    let output = run_match(&tmp, "fep:>50", &[]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Steak"));
}

#[test]
fn test_match_blank_query_matches_nothing() {
    let tmp = TempDir::new().unwrap();
    let output = run_match(&tmp, "   ", &[]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "No matching items.");
}

#[test]
fn test_match_respects_config() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("config.toml"), "[fuzzy]\nmax_edits = 0\n").unwrap();

    let output = run_match(&tmp, "bronse", &[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "No matching items.");

    std::fs::remove_file(tmp.path().join("config.toml")).unwrap();
    let output = run_match(&tmp, "bronse", &[]);
    assert!(stdout(&output).contains("Bronze Bar"));
}

#[test]
fn test_match_malformed_snapshot_fails() {
    let tmp = TempDir::new().unwrap();
    let snapshot = write_snapshot(tmp.path(), "bad.json", "{ \"items\": [ ");

    let output = hsq_cmd(tmp.path())
        .args(["match", "bronze", "-i"])
        .arg(&snapshot)
        .output()
        .expect("failed to run hsq match");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

#[test]
fn test_match_missing_snapshot_fails() {
    let tmp = TempDir::new().unwrap();
    let output = hsq_cmd(tmp.path())
        .args(["match", "bronze", "-i"])
        .arg(tmp.path().join("missing.json"))
        .output()
        .expect("failed to run hsq match");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Snapshot not found"));
}

#[test]
fn test_inspect_shows_contents() {
    let tmp = TempDir::new().unwrap();
    let snapshot = write_snapshot(tmp.path(), "bag.json", SNAPSHOT);

    let output = hsq_cmd(tmp.path())
        .args(["inspect", "-i"])
        .arg(&snapshot)
        .output()
        .expect("failed to run hsq inspect");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("10 Water q42"));
    assert!(out.contains("holds s1"));
    assert!(out.contains("7 items, 2 stacks"));
}

#[test]
fn test_inspect_toml_snapshot() {
    let tmp = TempDir::new().unwrap();
    let snapshot = write_snapshot(
        tmp.path(),
        "bag.toml",
        "[[items]]\nname = \"Pipe\"\ncuriosity = { exp = 120, lph = 2 }\n",
    );

    let output = hsq_cmd(tmp.path())
        .args(["inspect", "-i"])
        .arg(&snapshot)
        .output()
        .expect("failed to run hsq inspect");

    assert!(output.status.success());
    assert!(stdout(&output).contains("Pipe"));
    assert!(stdout(&output).contains("1 items, 0 stacks"));
}

#[test]
fn test_config_init() {
    let tmp = TempDir::new().unwrap();

    let output = hsq_cmd(tmp.path())
        .args(["config", "--init"])
        .output()
        .expect("failed to run hsq config");
    assert!(output.status.success());
    assert!(tmp.path().join("config.toml").exists());

    let output = hsq_cmd(tmp.path())
        .args(["config"])
        .output()
        .expect("failed to run hsq config");
    assert!(stdout(&output).contains("fuzzy.max_edits: 1"));
}
