//! Tests for `modbin plan`.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn plan_lists_missing_and_present_binaries() {
  let env = TestEnv::new();
  env.add_module("shell");
  env.write_file("shell/shell.linux", "old");

  env
    .plan_cmd()
    .assert()
    .success()
    .stdout(predicate::str::contains("shell.darwin (build)"))
    .stdout(predicate::str::contains("shell.linux (already present)"))
    .stdout(predicate::str::contains("To build: 1"))
    .stdout(predicate::str::contains("Naming: qualified"));
}

#[test]
fn plan_never_runs_compiler() {
  let env = TestEnv::new();
  env.add_module("apt");

  env.plan_cmd().arg("--force").assert().success();

  assert!(env.invocations().is_empty());
  assert!(!env.exists("apt/apt.linux"));
}

#[test]
fn plan_force_marks_rebuild() {
  let env = TestEnv::new();
  env.add_module("apt");
  env.write_file("apt/apt.linux", "old");

  env
    .plan_cmd()
    .arg("--force")
    .assert()
    .success()
    .stdout(predicate::str::contains("apt.linux (rebuild)"));
}

#[test]
fn plan_rejects_ambiguous_module() {
  let env = TestEnv::new();
  env.write_file("template/a.go", "package main\n");
  env.write_file("template/b.go", "package main\n");

  env
    .plan_cmd()
    .assert()
    .failure()
    .stderr(predicate::str::contains("more than one .go source"));
}

#[test]
fn plan_json_includes_decisions() {
  let env = TestEnv::new();
  env.add_module("apt");
  env.add_module("shell");

  let output = env
    .plan_cmd()
    .args(["--module", "apt", "--output", "json"])
    .assert()
    .success()
    .get_output()
    .stdout
    .clone();

  let planned: serde_json::Value = serde_json::from_slice(&output).unwrap();
  let entries = planned.as_array().unwrap();
  assert_eq!(entries.len(), 4);
  assert_eq!(entries[0]["platform"], "linux");
  assert_eq!(entries[0]["decision"], "build");
  assert_eq!(entries[2]["module"]["name"], "shell");
  assert_eq!(entries[2]["decision"], "filtered");
}
