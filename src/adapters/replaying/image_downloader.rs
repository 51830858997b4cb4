//! Replaying adapter for the `ImageDownloader` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::image_downloader::{Download, FetchFuture, ImageDownloader};

/// Serves recorded downloads from a cassette; the URL is not checked.
pub struct ReplayingImageDownloader {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingImageDownloader {
    /// Create a replaying downloader backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl ImageDownloader for ReplayingImageDownloader {
    fn fetch(&self, _url: &str) -> FetchFuture<'_> {
        let output = next_output(&self.replayer, "image_downloader", "fetch");
        Box::pin(async move { replay_result::<Download>(output?) })
    }
}
