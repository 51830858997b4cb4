//! Default input path resolution.

use std::path::{Path, PathBuf};

use crate::error::ImageError;

/// The user's `~/Desktop` directory.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn desktop_dir() -> Result<PathBuf, ImageError> {
    dirs::home_dir()
        .map(|home| home.join("Desktop"))
        .ok_or_else(|| ImageError::Config("Could not determine the home directory".to_string()))
}

/// Resolve an input image: the explicit path if one was given, otherwise
/// `default_name` inside `~/Desktop`. An absolute `default_name` is used as-is.
///
/// # Errors
///
/// Returns an error if no explicit path is given and the home directory
/// cannot be determined.
pub fn resolve_image_path(
    explicit: Option<&Path>,
    default_name: &str,
) -> Result<PathBuf, ImageError> {
    match explicit {
        Some(p) => Ok(p.to_path_buf()),
        None => Ok(desktop_dir()?.join(default_name)),
    }
}
