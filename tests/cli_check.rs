use std::fs;
use std::process::Command;

use tempfile::tempdir;

const MATCHING_SNAPSHOT: &str = r#"
[[websites]]
id = 1
code = "base"
name = "Main Website"

[[stores]]
id = 1
website_id = 1
code = "default"
name = "Default Store View"

[values.default]
"dev/js/merge_files" = true
"dev/debug/debug_logging" = false
"#;

const RULES: &str = r#"
[[rule]]
title = "JavaScript file merging"
key = "dev/js/merge_files"
recommended = true

[[rule]]
title = "Debug logging"
key = "dev/debug/debug_logging"
recommended = false
"#;

fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_check_passes_on_matching_snapshot() {
    let dir = tempdir().unwrap();
    let snapshot = write(&dir, "snapshot.toml", MATCHING_SNAPSHOT);
    let rules = write(&dir, "rules.toml", RULES);
    let bin = env!("CARGO_BIN_EXE_scopecheck");

    let output = Command::new(bin)
        .args(["check", "--snapshot"])
        .arg(&snapshot)
        .arg("--rules")
        .arg(&rules)
        .arg("--ascii")
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("All settings match recommendations"),
        "check output should report success; got:\n{}",
        stdout
    );
    assert!(stdout.contains("2 ok"));
}

#[test]
fn test_check_fails_on_store_override() {
    let dir = tempdir().unwrap();
    let mut content = MATCHING_SNAPSHOT.to_string();
    content.push_str("\n[values.\"stores/default\"]\n\"dev/debug/debug_logging\" = true\n");
    let snapshot = write(&dir, "snapshot.toml", &content);
    let rules = write(&dir, "rules.toml", RULES);
    let bin = env!("CARGO_BIN_EXE_scopecheck");

    let output = Command::new(bin)
        .args(["check", "--snapshot"])
        .arg(&snapshot)
        .arg("--rules")
        .arg(&rules)
        .arg("--ascii")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Enabled for store 'Default Store View'"),
        "mismatch line missing; got:\n{}",
        stdout
    );
    assert!(stdout.contains("Switch to Disabled for store 'Default Store View'"));
    assert!(stdout.contains("1 problems"));
}

#[test]
fn test_check_json_emits_row_events() {
    let dir = tempdir().unwrap();
    let snapshot = write(&dir, "snapshot.toml", MATCHING_SNAPSHOT);
    let rules = write(&dir, "rules.toml", RULES);
    let bin = env!("CARGO_BIN_EXE_scopecheck");

    let output = Command::new(bin)
        .args(["check", "--json", "--snapshot"])
        .arg(&snapshot)
        .arg("--rules")
        .arg(&rules)
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let events: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("every line is JSON"))
        .collect();

    assert_eq!(events.first().unwrap()["event"], "start");
    assert_eq!(events.last().unwrap()["event"], "complete");
    let rows: Vec<_> = events.iter().filter(|e| e["event"] == "row").collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["status"], "ok");
    assert_eq!(rows[0]["status_code"], 0);
}

#[test]
fn test_check_rejects_missing_snapshot() {
    let dir = tempdir().unwrap();
    let bin = env!("CARGO_BIN_EXE_scopecheck");

    let output = Command::new(bin)
        .args(["check", "--snapshot"])
        .arg(dir.path().join("nope.toml"))
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[test]
fn test_check_warns_on_unknown_rule_keys() {
    let dir = tempdir().unwrap();
    let snapshot = write(&dir, "snapshot.toml", MATCHING_SNAPSHOT);
    let rules = write(
        &dir,
        "rules.toml",
        r#"
[[rule]]
title = "JavaScript file merging"
key = "dev/js/merge_files"
recommended = true
severity = "high"
"#,
    );
    let bin = env!("CARGO_BIN_EXE_scopecheck");

    let output = Command::new(bin)
        .args(["check", "--snapshot"])
        .arg(&snapshot)
        .arg("--rules")
        .arg(&rules)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown key"), "stderr:\n{}", stderr);
}

#[test]
fn test_rules_lists_builtin_catalog() {
    let bin = env!("CARGO_BIN_EXE_scopecheck");

    let output = Command::new(bin).args(["rules"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Debug logging"));
    assert!(stdout.contains("dev/debug/debug_logging"));
}
