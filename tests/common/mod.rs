//! Shared helpers for the binary integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// A command for the binary at `exe` isolated from the user's home, config,
/// and API keys. Pass `env!("CARGO_BIN_EXE_<name>")`.
pub fn isolated(exe: &str, home: &Path) -> Command {
    let mut cmd = Command::new(exe);
    cmd.env("HOME", home)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("IMGTOOLS_CONFIG")
        .env_remove("IMGTOOLS_REPLAY")
        .env_remove("IMGTOOLS_REC")
        .env_remove("OPENAI_API_KEY")
        .env_remove("OPENAI_BASE_URL")
        .env_remove("RUST_LOG")
        .current_dir(home);
    cmd
}

/// Create `~/Desktop` under `home` and return its path.
pub fn desktop(home: &Path) -> PathBuf {
    let dir = home.join("Desktop");
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// A `width` x `height` horizontal grey gradient, encoded as PNG.
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_fn(width, height, |x, _| {
        let v = u8::try_from(x * 255 / width.max(1)).unwrap_or(255);
        image::Rgb([v, v, v])
    });
    let mut bytes = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png).unwrap();
    bytes
}

/// Write a `width` x `height` horizontal grey gradient PNG to `path`.
pub fn write_gradient_png(path: &Path, width: u32, height: u32) {
    std::fs::write(path, gradient_png(width, height)).unwrap();
}

/// Lines of `art` and the widest line's length in characters.
pub fn shape(art: &str) -> (usize, usize) {
    let lines = art.lines().count();
    let widest = art.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    (lines, widest)
}
