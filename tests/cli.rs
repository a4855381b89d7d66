// Integration tests for the duo_detect CLI.
//
// These only exercise paths that fail before any network call: argument
// parsing and Riot ID validation.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the duo_detect binary.
fn duo_detect() -> Command {
    Command::cargo_bin("duo_detect").expect("binary should exist")
}

#[test]
fn cli_help_flag() {
    duo_detect()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("who is boosting whom"));
}

#[test]
fn riot_id_without_tag_is_rejected() {
    duo_detect()
        .arg("Faker")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid Riot ID"));
}

#[test]
fn riot_id_with_empty_tag_is_rejected() {
    duo_detect()
        .arg("Faker#")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name#TAG"));
}

#[test]
fn unknown_region_is_rejected_by_clap() {
    duo_detect()
        .arg("Faker#KR1")
        .arg("--region")
        .arg("moon1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn unknown_queue_is_rejected_by_clap() {
    duo_detect()
        .arg("Faker#KR1")
        .arg("--queue")
        .arg("urf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn missing_api_key_is_a_config_error() {
    duo_detect()
        .current_dir(std::env::temp_dir())
        .env_remove("RIOT_API_KEY")
        .arg("Faker#KR1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("RIOT_API_KEY"));
}
