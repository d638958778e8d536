//! Integration tests for the seedmix CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp directory with a handful of player YAMLs.
fn test_players() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("A.yaml"),
        r#"game: Zelda
Zelda:
  hearts: 3
  sword: master
"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("B.yaml"),
        r#"game: Metroid
Metroid:
  missiles: 5
"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("combo.yaml"),
        r#"name: Combo
game:
  Kirby: 50
  Pokemon: 50
Kirby:
  copy_abilities: true
Pokemon:
  starter: random
triggers:
  - option_name: goal
    option_result: any
    options:
      Kirby:
        goal: boss
"#,
    )
    .unwrap();
    fs::write(dir.path().join("broken.yaml"), "name: Nobody\n").unwrap();
    dir
}

fn seedmix() -> Command {
    Command::cargo_bin("seedmix").unwrap()
}

fn path_arg(dir: &TempDir, file: &str) -> String {
    dir.path().join(file).to_str().unwrap().to_string()
}

fn read_yaml(path: &Path) -> serde_yml::Value {
    serde_yml::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// ---------------------------------------------------------------------------
// merge
// ---------------------------------------------------------------------------

#[test]
fn merge_writes_weighted_seed() {
    let dir = test_players();
    let out = dir.path().join("Seed1.yaml");

    seedmix()
        .arg("merge")
        .arg(format!("{}=3", path_arg(&dir, "A.yaml")))
        .arg(path_arg(&dir, "B.yaml"))
        .args(["--name", "Seed1", "--output", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Merged").and(predicate::str::contains("2 games")));

    let seed = read_yaml(&out);
    assert_eq!(seed["name"].as_str(), Some("Seed1"));
    assert_eq!(seed["game"]["Zelda"].as_u64(), Some(3));
    assert_eq!(seed["game"]["Metroid"].as_u64(), Some(1));
    assert_eq!(seed["Zelda"]["sword"].as_str(), Some("master"));
    assert_eq!(seed["Metroid"]["missiles"].as_u64(), Some(5));

    let triggers = seed["triggers"].as_sequence().unwrap();
    assert_eq!(triggers.len(), 2);
    assert_eq!(triggers[0]["option_result"].as_str(), Some("Zelda"));
    assert_eq!(triggers[1]["option_result"].as_str(), Some("Metroid"));
}

#[test]
fn merge_defaults_to_name_dot_yaml() {
    let dir = test_players();

    seedmix()
        .args(["merge", "A.yaml", "--name", "Weekly"])
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("Weekly.yaml").exists());
}

#[test]
fn merge_to_stdout_carries_triggers_first() {
    let dir = test_players();

    let output = seedmix()
        .arg("merge")
        .arg(format!("{}=2", path_arg(&dir, "combo.yaml")))
        .arg(path_arg(&dir, "A.yaml"))
        .args(["--name", "Seed", "--stdout"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let seed: serde_yml::Value = serde_yml::from_str(&String::from_utf8(output).unwrap()).unwrap();
    assert_eq!(seed["game"]["Kirby"].as_u64(), Some(2));
    assert_eq!(seed["game"]["Pokemon"].as_u64(), Some(2));
    assert_eq!(seed["game"]["Zelda"].as_u64(), Some(1));

    let triggers = seed["triggers"].as_sequence().unwrap();
    assert_eq!(triggers.len(), 4);
    assert_eq!(triggers[0]["option_name"].as_str(), Some("goal"));
    for trigger in &triggers[1..] {
        assert_eq!(trigger["option_name"].as_str(), Some("game"));
    }
}

#[test]
fn merge_rejects_negative_weight() {
    let dir = test_players();

    seedmix()
        .arg("merge")
        .arg(format!("{}=-1", path_arg(&dir, "A.yaml")))
        .args(["--name", "Seed", "--stdout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid weight"));
}

#[test]
fn merge_rejects_empty_name() {
    let dir = test_players();

    seedmix()
        .arg("merge")
        .arg(path_arg(&dir, "A.yaml"))
        .args(["--name", "  ", "--stdout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("output name cannot be empty"));
}

#[test]
fn merge_fails_on_missing_game() {
    let dir = test_players();
    let out = dir.path().join("never.yaml");

    seedmix()
        .arg("merge")
        .arg(path_arg(&dir, "A.yaml"))
        .arg(path_arg(&dir, "broken.yaml"))
        .args(["--output", out.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.yaml").and(predicate::str::contains("game")));

    assert!(!out.exists());
}

#[test]
fn merge_warns_about_non_yaml() {
    let dir = test_players();
    fs::write(dir.path().join("notes.txt"), "hello").unwrap();

    seedmix()
        .arg("merge")
        .arg(path_arg(&dir, "A.yaml"))
        .arg(path_arg(&dir, "notes.txt"))
        .arg("--stdout")
        .assert()
        .success()
        .stderr(predicate::str::contains("not a YAML file"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_lists_slots() {
    let dir = test_players();

    seedmix()
        .arg("check")
        .arg(path_arg(&dir, "A.yaml"))
        .arg(path_arg(&dir, "combo.yaml"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Zelda")
                .and(predicate::str::contains("Kirby, Pokemon"))
                .and(predicate::str::contains("Combo"))
                .and(predicate::str::contains("2 sources, 2 slots, 3 game entries")),
        );
}

#[test]
fn check_reports_structural_error() {
    let dir = test_players();

    seedmix()
        .arg("check")
        .arg(path_arg(&dir, "broken.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing `game` field"));
}

#[test]
fn check_reports_parse_error() {
    let dir = test_players();
    fs::write(dir.path().join("bad.yaml"), "game: [unclosed\n").unwrap();

    seedmix()
        .arg("check")
        .arg(path_arg(&dir, "bad.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

// ---------------------------------------------------------------------------
// tui
// ---------------------------------------------------------------------------

#[test]
fn tui_rejects_non_yaml_before_starting() {
    seedmix()
        .args(["tui", "notes.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a YAML file"));
}
