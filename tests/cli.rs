//! `generate-image` argument and configuration errors - no network I/O.
//!
//! Every case here fails before any cassette or live adapter is consulted.

mod common;

use predicates::prelude::*;

const EXE: &str = env!("CARGO_BIN_EXE_generate-image");

#[test]
fn missing_prompt_exits_with_error() {
    let home = tempfile::tempdir().unwrap();
    common::isolated(EXE, home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Provide a prompt string"));
}

#[test]
fn unknown_model_exits_with_error() {
    let home = tempfile::tempdir().unwrap();
    common::isolated(EXE, home.path())
        .args(["--model", "gpt-image-1", "a cat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported model"));
}

#[test]
fn invalid_size_exits_with_error() {
    let home = tempfile::tempdir().unwrap();
    common::isolated(EXE, home.path())
        .args(["--size", "640x480", "a cat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported size"));
}

#[test]
fn hd_quality_rejected_for_dalle2() {
    let home = tempfile::tempdir().unwrap();
    common::isolated(EXE, home.path())
        .args(["--model", "dalle2", "--size", "512x512", "--quality", "hd", "a cat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported quality"));
}

#[test]
fn missing_api_key_exits_with_error() {
    let home = tempfile::tempdir().unwrap();
    common::isolated(EXE, home.path())
        .arg("a cat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY"));

    assert!(!home.path().join("generated_image.png").exists());
}

#[test]
fn broken_config_exits_with_error() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("broken.toml");
    std::fs::write(&config, "[generate\nmodel = ").unwrap();

    common::isolated(EXE, home.path())
        .arg("--config")
        .arg(&config)
        .arg("a cat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}
