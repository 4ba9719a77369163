//! Integration tests for the `ql` CLI.
//!
//! Each test creates a temp questlog directory, runs `ql` as a subprocess,
//! and verifies stdout and/or file contents.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Get the path to the built `ql` binary.
fn ql_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("ql");
    path
}

/// Create a small catalog in the given directory.
fn create_test_catalog(root: &Path) {
    fs::write(
        root.join("quests.json"),
        r#"[
  {
    "id": "ranni",
    "npc": "Ranni the Witch",
    "location": "Three Sisters",
    "description": "Aid the witch in her long plan.",
    "category": "major",
    "steps": [
      { "id": "s1", "title": "Meet Ranni", "description": "Visit at night." },
      { "id": "s2", "title": "Recover the treasure", "description": "" }
    ]
  },
  {
    "id": "alex",
    "npc": "Alexander, Warrior Jar",
    "location": "Stormhill",
    "description": "Help the great jar.",
    "category": "side",
    "steps": [
      { "id": "a1", "title": "Pull Alexander free", "description": "" }
    ]
  },
  {
    "id": "hermit",
    "npc": "Silent Hermit",
    "location": "Nowhere",
    "description": "A quest with no steps.",
    "category": "side",
    "steps": []
  },
  {
    "id": "leda",
    "npc": "Needle Knight Leda",
    "location": "Gravesite Plain",
    "description": "Follow the guided ones.",
    "category": "dlc",
    "steps": [
      { "id": "d1", "title": "Speak with Leda", "description": "", "sequenceOrder": 1 },
      { "id": "d2", "title": "Reach the ruins", "description": "", "sequenceOrder": 0 }
    ]
  }
]"#,
    )
    .unwrap();
}

/// Run `ql` with the given args in the given directory.
fn ql(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(ql_bin())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run ql")
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn read_progress(dir: &Path) -> serde_json::Value {
    let text = fs::read_to_string(dir.join("progress.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_catalog_and_progress() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = ql(tmp.path(), &["init"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(tmp.path().join("quests.json").exists());
    assert!(tmp.path().join("progress.json").exists());

    // the starter catalog must itself parse
    let out = ql(tmp.path(), &["list"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stdout(&out).contains("Ranni"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let tmp = tempfile::TempDir::new().unwrap();
    assert!(ql(tmp.path(), &["init"]).status.success());

    let out = ql(tmp.path(), &["init"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("--force"));

    let out = ql(tmp.path(), &["init", "--force"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
}

// ---------------------------------------------------------------------------
// read commands
// ---------------------------------------------------------------------------

#[test]
fn list_shows_all_quests_with_progress() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_catalog(tmp.path());

    let out = ql(tmp.path(), &["list"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let text = stdout(&out);
    assert!(text.contains("Ranni the Witch"));
    assert!(text.contains("Needle Knight Leda"));
    assert!(text.contains("0/2"));
}

#[test]
fn list_tab_filters_categories() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_catalog(tmp.path());

    let out = ql(tmp.path(), &["list", "--tab", "base"]);
    let text = stdout(&out);
    // base is inclusive: major and side both appear
    assert!(text.contains("Ranni the Witch"));
    assert!(text.contains("Alexander"));
    assert!(!text.contains("Leda"));

    let out = ql(tmp.path(), &["list", "--tab", "dlc"]);
    let text = stdout(&out);
    assert!(text.contains("Leda"));
    assert!(!text.contains("Ranni"));
}

#[test]
fn list_json_is_machine_readable() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_catalog(tmp.path());

    let out = ql(tmp.path(), &["list", "--json"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    let quests = value["quests"].as_array().unwrap();
    assert_eq!(quests.len(), 4);
    assert_eq!(quests[0]["id"], "ranni");
    assert_eq!(quests[0]["total"], 2);
    assert_eq!(quests[0]["done"], false);
}

#[test]
fn show_prints_steps() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_catalog(tmp.path());

    let out = ql(tmp.path(), &["show", "ranni"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Meet Ranni"));
    assert!(text.contains("[ ] s1"));
}

#[test]
fn show_unknown_quest_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_catalog(tmp.path());

    let out = ql(tmp.path(), &["show", "ghost"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("quest not found"));
}

#[test]
fn stats_aggregates_by_tab() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_catalog(tmp.path());
    assert!(ql(tmp.path(), &["check", "s1"]).status.success());

    // whole catalog: 1 of 5 steps → 20%
    let out = ql(tmp.path(), &["stats", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["percent"], 20);
    assert_eq!(value["completed_steps"], 1);
    assert_eq!(value["total_steps"], 5);
    // the zero-step hermit quest must not count as done
    assert_eq!(value["completed_quests"], 0);
    assert_eq!(value["total_quests"], 4);

    // base tab only: 1 of 3 steps → 33%
    let out = ql(tmp.path(), &["stats", "--tab", "base", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["percent"], 33);
    assert_eq!(value["total_steps"], 3);
}

// ---------------------------------------------------------------------------
// write commands
// ---------------------------------------------------------------------------

#[test]
fn check_writes_through_to_disk() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_catalog(tmp.path());

    let out = ql(tmp.path(), &["check", "s1"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(read_progress(tmp.path()), serde_json::json!({"s1": true}));

    let out = ql(tmp.path(), &["uncheck", "s1"]);
    assert!(out.status.success());
    assert_eq!(read_progress(tmp.path()), serde_json::json!({"s1": false}));
}

#[test]
fn check_unknown_step_warns_but_records() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_catalog(tmp.path());

    let out = ql(tmp.path(), &["check", "stale-id"]);
    assert!(out.status.success());
    assert!(stderr(&out).contains("not in the catalog"));
    assert_eq!(read_progress(tmp.path())["stale-id"], true);
}

#[test]
fn stale_progress_keys_are_kept_not_purged() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_catalog(tmp.path());
    fs::write(
        tmp.path().join("progress.json"),
        r#"{"removed-step": true}"#,
    )
    .unwrap();

    assert!(ql(tmp.path(), &["check", "s1"]).status.success());
    let progress = read_progress(tmp.path());
    assert_eq!(progress["removed-step"], true);
    assert_eq!(progress["s1"], true);
}

#[test]
fn reset_requires_yes_when_not_interactive() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_catalog(tmp.path());
    assert!(ql(tmp.path(), &["check", "s1"]).status.success());

    let out = ql(tmp.path(), &["reset"]);
    assert!(!out.status.success());

    let out = ql(tmp.path(), &["reset", "--yes"]);
    assert!(out.status.success());
    assert_eq!(read_progress(tmp.path()), serde_json::json!({}));
}

// ---------------------------------------------------------------------------
// next
// ---------------------------------------------------------------------------

#[test]
fn next_follows_sequence_order_then_advances() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_catalog(tmp.path());

    // d2 has sequenceOrder 0, d1 has 1: d2 first despite file order
    let out = ql(tmp.path(), &["next"]);
    assert!(stdout(&out).contains("d2"));

    assert!(ql(tmp.path(), &["check", "d2"]).status.success());
    let out = ql(tmp.path(), &["next"]);
    assert!(stdout(&out).contains("d1"));

    assert!(ql(tmp.path(), &["check", "d1"]).status.success());
    let out = ql(tmp.path(), &["next"]);
    assert!(stdout(&out).contains("all DLC steps complete"));

    let out = ql(tmp.path(), &["next", "--json"]);
    assert_eq!(stdout(&out).trim(), "null");
}

#[test]
fn next_json_carries_quest_context() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_catalog(tmp.path());

    let out = ql(tmp.path(), &["next", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["quest_id"], "leda");
    assert_eq!(value["quest_name"], "Needle Knight Leda");
    assert_eq!(value["step"]["id"], "d2");
}

// ---------------------------------------------------------------------------
// error handling
// ---------------------------------------------------------------------------

#[test]
fn corrupt_progress_resets_silently() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_catalog(tmp.path());
    fs::write(tmp.path().join("progress.json"), "not json {{{").unwrap();

    let out = ql(tmp.path(), &["stats", "--json"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["completed_steps"], 0);
}

#[test]
fn malformed_catalog_is_fatal() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("quests.json"), "not json {{{").unwrap();

    let out = ql(tmp.path(), &["list"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("quests.json"));
}

#[test]
fn dir_flag_overrides_discovery() {
    let tmp = tempfile::TempDir::new().unwrap();
    let elsewhere = tempfile::TempDir::new().unwrap();
    create_test_catalog(tmp.path());

    let dir_arg = tmp.path().to_str().unwrap();
    let out = Command::new(ql_bin())
        .args(["-C", dir_arg, "list"])
        .current_dir(elsewhere.path())
        .output()
        .unwrap();
    // elsewhere has no catalog, so this must have used -C
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stdout(&out).contains("Ranni"));
}
