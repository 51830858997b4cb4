//! Unified error type for imgtools.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in any of the imgtools programs.
#[derive(Debug, Error)]
pub enum ImageError {
    /// An API returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// A network error occurred.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An image could not be opened or decoded.
    #[error("Failed to load image from {}: {source}", path.display())]
    ImageLoad {
        /// Path of the image that failed to load.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: image::ImageError,
    },

    /// No API key configured.
    #[error("No API key for {provider}. Set {env_var} or add it to config file.")]
    MissingApiKey {
        /// The provider name.
        provider: String,
        /// The environment variable name.
        env_var: String,
    },

    /// The generated image could not be downloaded.
    #[error("Failed to download the image from {url} (HTTP {status})")]
    DownloadFailed {
        /// HTTP status returned by the image host.
        status: u16,
        /// URL that was requested.
        url: String,
    },

    /// A cassette could not serve the requested interaction.
    #[error("Replay error: {0}")]
    Replay(String),
}
