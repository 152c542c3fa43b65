//! Binary-level flag surface checks. Nothing here touches docker or git.

use assert_cmd::Command;

#[test]
fn deploy_help_lists_flags() {
    let mut cmd = Command::cargo_bin("deploy").unwrap();
    let assert = cmd.arg("--help").assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("--action"));
    assert!(output.contains("--target"));
    assert!(output.contains("--version"));
    assert!(output.contains("--push"));
}

#[test]
fn deploy_rejects_unknown_action() {
    let mut cmd = Command::cargo_bin("deploy").unwrap();
    cmd.args(["--action", "destroy"]).assert().failure();
}

#[test]
fn repo_init_help_lists_flags() {
    let mut cmd = Command::cargo_bin("repo-init").unwrap();
    let assert = cmd.arg("--help").assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("--repo"));
    assert!(output.contains("--user"));
}
