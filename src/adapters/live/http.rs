//! Live adapter that downloads images with a plain HTTP GET.

use reqwest::Client;

use crate::ports::image_downloader::{Download, FetchFuture, ImageDownloader};

/// Downloads image bytes over HTTP.
pub struct HttpDownloader {
    client: Client,
}

impl HttpDownloader {
    /// Create a downloader with a default client (no timeout).
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl Default for HttpDownloader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageDownloader for HttpDownloader {
    fn fetch(&self, url: &str) -> FetchFuture<'_> {
        let url = url.to_string();
        Box::pin(async move {
            let response = self.client.get(&url).send().await?;
            let status = response.status().as_u16();
            let data = response.bytes().await?.to_vec();
            tracing::debug!(%url, status, bytes = data.len(), "downloaded image");
            Ok(Download { status, data })
        })
    }
}
