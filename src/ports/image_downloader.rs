//! Image downloader port for fetching generated images.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::ImageError;

/// Status code that counts as a successful download.
pub const HTTP_OK: u16 = 200;

/// Raw result of fetching a URL. Any HTTP status is a valid `Download`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Download {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
}

impl Download {
    /// Whether the server answered exactly `200 OK`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == HTTP_OK
    }
}

/// Boxed future type returned by [`ImageDownloader::fetch`].
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<Download, ImageError>> + Send + 'a>>;

/// Fetches the bytes behind an image URL.
pub trait ImageDownloader: Send + Sync {
    /// Issue a GET for `url`. Only transport failures are errors.
    fn fetch(&self, url: &str) -> FetchFuture<'_>;
}

/// Serde helper for serializing `Vec<u8>` as base64 strings in cassettes.
mod base64_bytes {
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(data);
        serializer.serialize_str(&encoded)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        base64::engine::general_purpose::STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}
