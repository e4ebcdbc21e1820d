#![cfg(unix)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

const MISSING_RUNTIME: &str = "compose-executor-missing-runtime";

fn executor_cmd(config_dir: &std::path::Path) -> assert_cmd::Command {
    let mut command = cargo_bin_cmd!("compose-executor");
    command
        .current_dir(config_dir)
        .env("COMPOSE_EXECUTOR_CONFIG_DIR", config_dir)
        .env_remove("COMPOSE_EXECUTOR_RUNTIME")
        .env_remove("RUST_LOG");
    command
}

#[test]
fn help_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    executor_cmd(dir.path())
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn missing_positionals_do_nothing() {
    let dir = tempfile::tempdir().unwrap();
    executor_cmd(dir.path())
        .args(["--runtime", MISSING_RUNTIME, "edgex-core-data"])
        .assert()
        .success();
}

#[test]
fn unknown_service_never_invokes_runtime() {
    let dir = tempfile::tempdir().unwrap();
    executor_cmd(dir.path())
        .args(["--strict", "--runtime", MISSING_RUNTIME, "not-a-real-service", "start"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown service"));
}

#[test]
fn unknown_operation_never_invokes_runtime() {
    let dir = tempfile::tempdir().unwrap();
    executor_cmd(dir.path())
        .args(["--strict", "--runtime", MISSING_RUNTIME, "edgex-core-data", "pause"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown operation"));
}

#[test]
fn missing_runtime_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    executor_cmd(dir.path())
        .args(["--runtime", MISSING_RUNTIME, "edgex-core-data", "start"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("could not invoke container runtime"));
}

#[test]
fn failing_action_reports_command_failed() {
    let dir = tempfile::tempdir().unwrap();
    executor_cmd(dir.path())
        .args(["--strict", "--runtime", "false", "edgex-core-data", "stop"])
        .assert()
        .code(4);
}

#[test]
fn unverified_action_exit_code_depends_on_strict() {
    // `echo ps` prints no container lines, so verification cannot pass
    let dir = tempfile::tempdir().unwrap();
    executor_cmd(dir.path())
        .args(["--strict", "--runtime", "echo", "edgex-core-data", "start"])
        .assert()
        .code(5);

    executor_cmd(dir.path())
        .args(["--runtime", "echo", "edgex-core-data", "start"])
        .assert()
        .success();
}

#[test]
fn runtime_can_come_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("executor.toml"),
        format!("[runtime]\nbinary = \"{MISSING_RUNTIME}\"\n"),
    )
    .unwrap();

    executor_cmd(dir.path())
        .args(["edgex-core-data", "restart"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(MISSING_RUNTIME));
}

#[test]
fn lists_services() {
    let dir = tempfile::tempdir().unwrap();
    executor_cmd(dir.path())
        .arg("--list-services")
        .assert()
        .success()
        .stdout(predicate::str::contains("edgex-core-data"))
        .stdout(predicate::str::contains("CoreData"))
        .stdout(predicate::str::contains("runtime: docker"));
}

#[test]
fn init_config_writes_default_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("cfg");

    executor_cmd(dir.path())
        .env("COMPOSE_EXECUTOR_CONFIG_DIR", &config_dir)
        .arg("--init-config")
        .assert()
        .success();

    let written = fs::read_to_string(config_dir.join("executor.toml")).unwrap();
    assert!(written.contains("[services]"));
    assert!(written.contains("\"edgex-core-data\" = \"CoreData\""));
}

#[test]
fn arguments_after_operation_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    executor_cmd(dir.path())
        .args(["--runtime", "echo", "edgex-core-data", "start", "extra"])
        .assert()
        .success();

    executor_cmd(dir.path())
        .args(["--strict", "--runtime", "echo", "edgex-core-data", "start", "extra", "more"])
        .assert()
        .code(5);
}

#[test]
fn missing_positionals_skip_config_loading() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("executor.toml"), "[services\nbroken").unwrap();

    executor_cmd(dir.path()).assert().success();

    executor_cmd(dir.path())
        .args(["edgex-core-data", "start"])
        .assert()
        .code(1);
}

#[test]
fn unknown_service_is_logged_once() {
    let dir = tempfile::tempdir().unwrap();
    let assert = executor_cmd(dir.path())
        .args(["--runtime", MISSING_RUNTIME, "not-a-real-service", "start"])
        .assert()
        .success();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert_eq!(stderr.matches("unknown service").count(), 1, "stderr: {stderr}");
}
