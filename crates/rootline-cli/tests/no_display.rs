use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn fails_fast_when_display_is_unset() {
    cargo_bin_cmd!("rootline")
        .env_remove("DISPLAY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("open display"));
}

#[test]
fn fails_fast_on_unreachable_display() {
    cargo_bin_cmd!("rootline")
        .env("DISPLAY", ":219")
        .assert()
        .failure()
        .stderr(predicate::str::contains("open display"));
}
