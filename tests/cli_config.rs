mod harness;

use assert_fs::prelude::*;
use harness::TestContext;
use predicates::prelude::*;

#[test]
fn config_sets_export_directory() {
    let ctx = TestContext::new();
    ctx.write_config("[export]\ndirectory = \"prompts\"\n");

    ctx.cli().args(["generate", "-s", "a tram", "--download"]).assert().success();

    ctx.child("prompts/gemini-prompt.txt").assert(predicate::path::is_file());
}

#[test]
fn explicit_config_path_is_used() {
    let ctx = TestContext::new();
    ctx.write_file("settings/custom.toml", b"[export]\ndirectory = \"custom-out\"\n");

    ctx.cli()
        .args(["--config", "settings/custom.toml", "generate", "-s", "a tram", "-d"])
        .assert()
        .success();

    ctx.child("custom-out/gemini-prompt.txt").assert(predicate::path::is_file());
}

#[test]
fn invalid_config_fails() {
    let ctx = TestContext::new();
    ctx.write_config("[clipboard]\nconfirmation_secs = 0\n");

    ctx.cli()
        .args(["generate", "-s", "a tram"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn unknown_config_key_fails() {
    let ctx = TestContext::new();
    ctx.write_config("[export]\nfile_name = \"other.txt\"\n");

    ctx.cli()
        .args(["generate", "-s", "a tram"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML parse error"));
}

#[test]
fn missing_explicit_config_fails() {
    let ctx = TestContext::new();

    ctx.cli().args(["--config", "absent.toml", "generate", "-s", "a tram"]).assert().failure();
}
