//! Image to ASCII art conversion.

use std::num::NonZeroU32;
use std::path::Path;

use artem::config::ConfigBuilder;
use image::{DynamicImage, GenericImageView};

use crate::config::AsciiConfig;
use crate::error::ImageError;

/// Widest grid the converter will produce.
pub const MAX_COLUMNS: u32 = 10_000;

/// Tallest grid the converter will produce.
pub const MAX_ROWS: u32 = 10_000;

/// Accepted range for the character cell height-to-width ratio.
pub const WIDTH_RATIO_RANGE: std::ops::RangeInclusive<f32> = 0.1..=10.0;

/// Rendering parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsciiOptions {
    /// Output width in characters.
    pub columns: u32,
    /// How much taller a character cell is than it is wide.
    pub width_ratio: f32,
    /// Plain characters only; otherwise each character carries an ANSI colour.
    pub monochrome: bool,
}

impl Default for AsciiOptions {
    fn default() -> Self {
        Self { columns: 169, width_ratio: 2.2, monochrome: true }
    }
}

impl From<&AsciiConfig> for AsciiOptions {
    fn from(config: &AsciiConfig) -> Self {
        Self {
            columns: resolve_columns(None, config.fit, config.columns),
            width_ratio: config.width_ratio,
            monochrome: config.monochrome,
        }
    }
}

impl AsciiOptions {
    /// Check that the options describe a grid of sane size.
    ///
    /// # Errors
    ///
    /// Returns an error if `columns` is outside `1..=MAX_COLUMNS` or
    /// `width_ratio` is outside [`WIDTH_RATIO_RANGE`].
    pub fn validate(&self) -> Result<(), ImageError> {
        if !(1..=MAX_COLUMNS).contains(&self.columns) {
            return Err(ImageError::InvalidArgument(format!(
                "columns must be between 1 and {MAX_COLUMNS}, got {}",
                self.columns
            )));
        }
        if !WIDTH_RATIO_RANGE.contains(&self.width_ratio) {
            return Err(ImageError::InvalidArgument(format!(
                "width ratio must be between {} and {}, got {}",
                WIDTH_RATIO_RANGE.start(),
                WIDTH_RATIO_RANGE.end(),
                self.width_ratio
            )));
        }
        Ok(())
    }
}

/// Open and decode the image at `path`.
///
/// # Errors
///
/// Returns an error if the file is missing or cannot be decoded.
pub fn load_image(path: &Path) -> Result<DynamicImage, ImageError> {
    image::open(path).map_err(|source| ImageError::ImageLoad { path: path.to_path_buf(), source })
}

/// Expected number of text rows for a `width` x `height` image.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn row_count(width: u32, height: u32, options: &AsciiOptions) -> u32 {
    let rows = f64::from(options.columns) * f64::from(height)
        / f64::from(width.max(1))
        / f64::from(options.width_ratio);
    rows.floor().clamp(1.0, f64::from(u32::MAX)) as u32
}

/// Width for a terminal of `cols` x `rows` cells: square-ish art that never
/// overflows the terminal horizontally.
#[must_use]
pub fn fit_columns(cols: u16, rows: u16) -> Option<u32> {
    let fitted = u32::from(cols).min(u32::from(rows) * 2);
    (fitted > 0).then_some(fitted)
}

/// Width fitted to the controlling terminal, if there is one.
#[must_use]
pub fn terminal_columns() -> Option<u32> {
    match crossterm::terminal::size() {
        Ok((cols, rows)) => fit_columns(cols, rows),
        Err(e) => {
            tracing::debug!("terminal size unavailable: {e}");
            None
        }
    }
}

/// Pick the output width: an explicit value wins, then the terminal width
/// when `fit` is set, then `fallback`.
#[must_use]
pub fn resolve_columns(explicit: Option<u32>, fit: bool, fallback: u32) -> u32 {
    if let Some(columns) = explicit {
        return columns;
    }
    if fit {
        if let Some(columns) = terminal_columns() {
            return columns;
        }
    }
    fallback
}

/// Render `img` as ASCII art; rows are separated by `\n` with no trailing newline.
///
/// # Errors
///
/// Returns an error if the options are invalid or the image would produce
/// more than [`MAX_ROWS`] rows.
pub fn render(img: DynamicImage, options: &AsciiOptions) -> Result<String, ImageError> {
    options.validate()?;
    let (width, height) = img.dimensions();
    let rows = row_count(width, height, options);
    if rows > MAX_ROWS {
        return Err(ImageError::InvalidArgument(format!(
            "a {width}x{height} image at {} columns needs {rows} rows, the limit is {MAX_ROWS}",
            options.columns
        )));
    }

    let target_size = NonZeroU32::new(options.columns)
        .ok_or_else(|| ImageError::InvalidArgument("columns must be at least 1".to_string()))?;
    tracing::debug!(width, height, columns = options.columns, rows, "rendering ascii art");

    let config = ConfigBuilder::new()
        .target_size(target_size)
        .scale(1.0 / options.width_ratio)
        .color(!options.monochrome)
        .build();
    let art = artem::convert(img, &config);

    Ok(art.trim_end_matches('\n').to_string())
}
