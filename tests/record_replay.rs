//! `generate-image` cassette tests - no traffic leaves the machine.
//!
//! Replay tests write a cassette and point `IMGTOOLS_REPLAY` at it, so the
//! binary never contacts the API or the image host and needs no API key.
//! Recording tests aim the API at a closed local port.

mod common;

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use base64::Engine;
use predicates::prelude::*;

const EXE: &str = env!("CARGO_BIN_EXE_generate-image");
const IMAGE_URL: &str = "https://images.example.com/cat.png";

/// Write a cassette whose download returns `status` with `body`.
fn write_cassette(dir: &Path, status: u16, body: &[u8]) -> PathBuf {
    let b64 = base64::engine::general_purpose::STANDARD.encode(body);
    let content = format!(
        "name: replay-test\nrecorded_at: \"2026-02-01T00:00:00Z\"\ncommit: test\ninteractions:\n  - seq: 0\n    port: image_generator\n    method: generate\n    input: {{}}\n    output:\n      Ok:\n        images:\n          - url: {IMAGE_URL}\n            revised_prompt: a small cat\n  - seq: 1\n    port: image_downloader\n    method: fetch\n    input: {IMAGE_URL}\n    output:\n      Ok:\n        status: {status}\n        data: \"{b64}\"\n"
    );
    let path = dir.join("generate.cassette.yaml");
    std::fs::write(&path, content).unwrap();
    path
}

fn replaying(home: &Path, cassette: &Path) -> Command {
    let mut cmd = common::isolated(EXE, home);
    cmd.env("IMGTOOLS_REPLAY", cassette);
    cmd
}

#[test]
fn writes_exactly_the_downloaded_bytes() {
    let home = tempfile::tempdir().unwrap();
    let body: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    let cassette = write_cassette(home.path(), 200, &body);

    replaying(home.path(), &cassette)
        .arg("a cat")
        .assert()
        .success()
        .stdout(predicate::str::contains("Image saved as generated_image.png"));

    let written = std::fs::read(home.path().join("generated_image.png")).unwrap();
    assert_eq!(written.len(), 4096);
    assert_eq!(written, body);
}

#[test]
fn not_found_prints_error_and_exits_zero() {
    let home = tempfile::tempdir().unwrap();
    let cassette = write_cassette(home.path(), 404, b"");

    replaying(home.path(), &cassette)
        .arg("a cat")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error"))
        .stdout(predicate::str::contains(IMAGE_URL))
        .stdout(predicate::str::contains("Image saved").not());

    assert!(!home.path().join("generated_image.png").exists());
}

#[test]
fn strict_mode_fails_on_not_found() {
    let home = tempfile::tempdir().unwrap();
    let cassette = write_cassette(home.path(), 404, b"");

    replaying(home.path(), &cassette)
        .args(["--strict", "a cat"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("HTTP 404"));

    assert!(!home.path().join("generated_image.png").exists());
}

#[test]
fn second_run_overwrites_output() {
    let home = tempfile::tempdir().unwrap();
    let output = home.path().join("generated_image.png");
    std::fs::write(&output, vec![0u8; 10_000]).unwrap();
    let cassette = write_cassette(home.path(), 200, &[1, 2, 3, 4, 5]);

    for _ in 0..2 {
        replaying(home.path(), &cassette).arg("a cat").assert().success();
        assert_eq!(std::fs::read(&output).unwrap(), vec![1, 2, 3, 4, 5]);
    }
}

#[test]
fn explicit_output_path() {
    let home = tempfile::tempdir().unwrap();
    let cassette = write_cassette(home.path(), 200, b"PNGDATA");
    let out = home.path().join("nested-name.png");

    replaying(home.path(), &cassette)
        .arg("--output")
        .arg(&out)
        .arg("a cat")
        .assert()
        .success();

    assert_eq!(std::fs::read(&out).unwrap(), b"PNGDATA");
    assert!(!home.path().join("generated_image.png").exists());
}

#[test]
fn prompt_file_is_accepted() {
    let home = tempfile::tempdir().unwrap();
    let cassette = write_cassette(home.path(), 200, b"x");
    let prompt = home.path().join("prompt.txt");
    std::fs::write(&prompt, "a cat from a file\n").unwrap();

    replaying(home.path(), &cassette).arg("-p").arg(&prompt).assert().success();

    assert!(home.path().join("generated_image.png").exists());
}

#[test]
fn recorded_api_error_exits_with_error() {
    let home = tempfile::tempdir().unwrap();
    let cassette = home.path().join("api-error.cassette.yaml");
    std::fs::write(
        &cassette,
        "name: api-error\nrecorded_at: \"2026-02-01T00:00:00Z\"\ncommit: test\ninteractions:\n  - seq: 0\n    port: image_generator\n    method: generate\n    input: {}\n    output:\n      Err: \"API error (400): content policy violation\"\n",
    )
    .unwrap();

    replaying(home.path(), &cassette)
        .arg("a cat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("content policy violation"));
}

#[test]
fn missing_cassette_exits_with_error() {
    let home = tempfile::tempdir().unwrap();

    replaying(home.path(), &home.path().join("nope.cassette.yaml"))
        .arg("a cat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load cassette"));
}

#[test]
fn show_runs_renderer_on_saved_image() {
    let home = tempfile::tempdir().unwrap();
    let cassette = write_cassette(home.path(), 200, b"PNGDATA");
    let config = home.path().join("imgtools.toml");
    std::fs::write(&config, "[display]\ncommand = \"echo rendering\"\n").unwrap();

    replaying(home.path(), &cassette)
        .env("IMGTOOLS_CONFIG", &config)
        .args(["--show", "a cat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rendering generated_image.png"));
}

#[test]
fn ascii_prints_saved_image_as_art() {
    let home = tempfile::tempdir().unwrap();
    let cassette = write_cassette(home.path(), 200, &common::gradient_png(400, 200));

    let output = replaying(home.path(), &cassette)
        .args(["--ascii", "a cat"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    assert!(stdout.starts_with("Image saved as generated_image.png\n"));
    let art = stdout.trim_start_matches("Image saved as generated_image.png\n");
    assert!(!art.trim().is_empty());
    assert!(art.lines().all(|l| l.chars().count() <= 169));
}

#[test]
fn show_is_skipped_when_download_fails() {
    let home = tempfile::tempdir().unwrap();
    let cassette = write_cassette(home.path(), 500, b"");
    let config = home.path().join("imgtools.toml");
    std::fs::write(&config, "[display]\ncommand = \"echo rendering\"\n").unwrap();

    replaying(home.path(), &cassette)
        .env("IMGTOOLS_CONFIG", &config)
        .args(["--show", "a cat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rendering").not());
}

#[test]
fn dotenv_log_filter_applies() {
    let home = tempfile::tempdir().unwrap();
    let cassette = write_cassette(home.path(), 200, b"x");
    std::fs::write(home.path().join(".env"), "RUST_LOG=debug\n").unwrap();

    replaying(home.path(), &cassette)
        .arg("a cat")
        .assert()
        .success()
        .stderr(predicate::str::contains("resolved generation parameters"));
}

/// Cassettes written by a recording run in `home`.
fn recorded_cassettes(home: &Path) -> Vec<PathBuf> {
    let root = home.join(".imgtools").join("cassettes");
    let Ok(runs) = std::fs::read_dir(root) else {
        return Vec::new();
    };
    runs.filter_map(Result::ok)
        .map(|run| run.path().join("generate_image.cassette.yaml"))
        .filter(|path| path.exists())
        .collect()
}

#[test]
fn failed_generation_is_still_recorded() {
    let home = tempfile::tempdir().unwrap();

    common::isolated(EXE, home.path())
        .env("IMGTOOLS_REC", "1")
        .env("OPENAI_API_KEY", "sk-test")
        .env("OPENAI_BASE_URL", "http://127.0.0.1:9/v1")
        .arg("a cat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Network error"))
        .stderr(predicate::str::contains("Cassette saved"));

    let cassettes = recorded_cassettes(home.path());
    assert_eq!(cassettes.len(), 1);
    let yaml = std::fs::read_to_string(&cassettes[0]).unwrap();
    assert!(yaml.contains("port: image_generator"));
    assert!(yaml.contains("Err:"));

    // The recorded failure replays as a failure
    replaying(home.path(), &cassettes[0])
        .arg("a cat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Network error"));
}
