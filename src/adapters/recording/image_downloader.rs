//! Recording adapter for the `ImageDownloader` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::image_downloader::{FetchFuture, ImageDownloader};

/// Records downloads while delegating to an inner implementation.
pub struct RecordingImageDownloader {
    inner: Box<dyn ImageDownloader>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingImageDownloader {
    /// Creates a new recording downloader wrapping the given implementation.
    pub fn new(inner: Box<dyn ImageDownloader>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl ImageDownloader for RecordingImageDownloader {
    fn fetch(&self, url: &str) -> FetchFuture<'_> {
        let url = url.to_string();
        let recorder = Arc::clone(&self.recorder);

        Box::pin(async move {
            let result = self.inner.fetch(&url).await;
            record_result(&recorder, "image_downloader", "fetch", url.as_str(), &result);
            result
        })
    }
}
