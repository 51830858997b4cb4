//! Output path resolution and saving downloaded images.

use std::path::{Path, PathBuf};

use crate::error::ImageError;
use crate::ports::Download;

/// What happened to a download.
#[derive(Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The bytes were written to this path.
    Saved(PathBuf),
    /// The server did not answer `200 OK`; nothing was written.
    Skipped {
        /// The status the server returned.
        status: u16,
    },
}

/// Write the body of a successful download to `output_path`, replacing any
/// existing file. Downloads with any status other than 200 are not written.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_download(download: &Download, output_path: &Path) -> Result<SaveOutcome, ImageError> {
    if !download.is_ok() {
        tracing::debug!(status = download.status, "not saving failed download");
        return Ok(SaveOutcome::Skipped { status: download.status });
    }
    std::fs::write(output_path, &download.data)?;
    tracing::debug!(path = %output_path.display(), bytes = download.data.len(), "image written");
    Ok(SaveOutcome::Saved(output_path.to_path_buf()))
}

/// Resolve the output path: use the explicit path or the configured default.
#[must_use]
pub fn resolve_output_path(explicit: Option<&str>, default: &str) -> PathBuf {
    PathBuf::from(explicit.unwrap_or(default))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_exact_bytes_on_200() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated_image.png");
        let download = Download { status: 200, data: vec![7; 1234] };

        let outcome = save_download(&download, &path).unwrap();
        assert_eq!(outcome, SaveOutcome::Saved(path.clone()));
        assert_eq!(std::fs::read(&path).unwrap().len(), 1234);
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated_image.png");
        std::fs::write(&path, vec![0; 5000]).unwrap();

        save_download(&Download { status: 200, data: vec![1, 2, 3] }, &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn non_200_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated_image.png");

        let outcome =
            save_download(&Download { status: 404, data: b"not found".to_vec() }, &path).unwrap();
        assert_eq!(outcome, SaveOutcome::Skipped { status: 404 });
        assert!(!path.exists());
    }

    #[test]
    fn resolve_explicit() {
        assert_eq!(
            resolve_output_path(Some("my-image.png"), "generated_image.png"),
            PathBuf::from("my-image.png")
        );
    }

    #[test]
    fn resolve_default() {
        assert_eq!(
            resolve_output_path(None, "generated_image.png"),
            PathBuf::from("generated_image.png")
        );
    }
}
