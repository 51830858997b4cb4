//! Timed slideshow over a directory of images.
//!
//! On a terminal the slides cycle until `q`, `Esc` or `Ctrl-C` is pressed.
//! Without one (output piped, no stdin) every image is shown once.

use std::io::{self, IsTerminal, Write as _};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};

use crate::ascii::{load_image, render, AsciiOptions};
use crate::display::{build_command, run_command};
use crate::error::ImageError;

/// File extensions picked up from the slideshow directory.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// How each slide is drawn.
#[derive(Debug, Clone)]
pub enum SlideMode {
    /// Shell out to this renderer command.
    Renderer(String),
    /// Print ASCII art.
    Ascii(AsciiOptions),
}

/// List the images directly inside `dir`, sorted by file name.
///
/// # Errors
///
/// Returns an error if the directory cannot be read or holds no images.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>, ImageError> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_image_extension(path))
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(ImageError::InvalidArgument(format!(
            "no images found in {}",
            dir.display()
        )));
    }
    Ok(files)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

/// Show `files` one after another, `interval` apart. Returns how many slides were shown.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or read.
pub fn run(files: &[PathBuf], mode: &SlideMode, interval: Duration) -> Result<usize, ImageError> {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        execute!(io::stdout(), EnterAlternateScreen)?;
        let result = run_interactive(files, mode, interval);
        execute!(io::stdout(), LeaveAlternateScreen)?;
        result
    } else {
        Ok(run_once(files, mode, interval))
    }
}

fn run_once(files: &[PathBuf], mode: &SlideMode, interval: Duration) -> usize {
    for (i, path) in files.iter().enumerate() {
        if i > 0 {
            std::thread::sleep(interval);
        }
        show(path, mode);
    }
    files.len()
}

fn run_interactive(
    files: &[PathBuf],
    mode: &SlideMode,
    interval: Duration,
) -> Result<usize, ImageError> {
    let mut shown = 0;
    for path in files.iter().cycle() {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        show(path, mode);
        io::stdout().flush()?;
        shown += 1;

        if wait_for_quit(interval)? {
            break;
        }
    }
    Ok(shown)
}

/// Draw one slide. A bad image is reported and skipped.
fn show(path: &Path, mode: &SlideMode) {
    tracing::debug!(path = %path.display(), "showing slide");
    let result = match mode {
        SlideMode::Renderer(program) => {
            run_command(&build_command(program, path)).map(|outcome| outcome.to_string())
        }
        SlideMode::Ascii(options) => load_image(path).and_then(|img| render(img, options)),
    };
    match result {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("Error: {e}"),
    }
}

/// Block for `interval` in raw mode; true if the user asked to quit.
fn wait_for_quit(interval: Duration) -> Result<bool, ImageError> {
    enable_raw_mode()?;
    let result = poll_quit(interval);
    disable_raw_mode()?;
    result
}

fn poll_quit(interval: Duration) -> Result<bool, ImageError> {
    let deadline = Instant::now() + interval;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Ok(false);
        }
        if event::poll(remaining)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let ctrl_c = key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL);
                if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    return Ok(true);
                }
            }
        }
    }
}
