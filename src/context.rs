//! Service context that bundles all port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::http::HttpDownloader;
use crate::adapters::live::openai::OpenAiGenerator;
use crate::adapters::recording::image_downloader::RecordingImageDownloader;
use crate::adapters::recording::image_generator::RecordingImageGenerator;
use crate::adapters::replaying::image_downloader::ReplayingImageDownloader;
use crate::adapters::replaying::image_generator::ReplayingImageGenerator;
use crate::cassette::config::load_cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::config::{Config, OPENAI_KEY_ENV_VAR};
use crate::error::ImageError;
use crate::ports::{ImageDownloader, ImageGenerator};

/// Environment variable naming a cassette to replay instead of calling the network.
pub const REPLAY_ENV_VAR: &str = "IMGTOOLS_REPLAY";

/// Environment variable that turns on recording when set to `1` or `true`.
pub const RECORD_ENV_VAR: &str = "IMGTOOLS_REC";

/// Bundles all port trait objects into a single context.
pub struct ServiceContext {
    /// Image generator port.
    pub generator: Box<dyn ImageGenerator>,
    /// Image downloader port.
    pub downloader: Box<dyn ImageDownloader>,
}

/// Handle to a recording session that must be finished after use.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Finish the recording and write the cassette file to disk.
    ///
    /// The [`ServiceContext`] created with this session must be dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if adapters still hold the recorder or the cassette
    /// file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recording adapter still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

impl ServiceContext {
    /// Pick live, recording, or replaying mode from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen mode cannot be set up.
    pub fn from_env(config: &Config) -> Result<(Self, Option<RecordingSession>), ImageError> {
        let is_recording = std::env::var(RECORD_ENV_VAR).is_ok_and(|v| v == "true" || v == "1");

        if let Ok(cassette_path) = std::env::var(REPLAY_ENV_VAR) {
            tracing::debug!(%cassette_path, "replaying from cassette");
            Ok((Self::replaying(Path::new(&cassette_path))?, None))
        } else if is_recording {
            tracing::debug!("recording mode enabled");
            let (ctx, session) = Self::recording(config)?;
            Ok((ctx, Some(session)))
        } else {
            Ok((Self::live(config)?, None))
        }
    }

    /// Create a live context.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not configured.
    pub fn live(config: &Config) -> Result<Self, ImageError> {
        let key = config.openai_key().ok_or_else(|| ImageError::MissingApiKey {
            provider: "OpenAI".into(),
            env_var: OPENAI_KEY_ENV_VAR.into(),
        })?;
        let mut generator = OpenAiGenerator::new(key);
        if let Some(base_url) = config.openai_base_url() {
            generator = generator.with_base_url(base_url);
        }
        Ok(Self { generator: Box::new(generator), downloader: Box::new(HttpDownloader::new()) })
    }

    /// Create a recording context that wraps the live adapters with a recorder.
    ///
    /// # Errors
    ///
    /// Returns an error if the live context cannot be created.
    pub fn recording(config: &Config) -> Result<(Self, RecordingSession), ImageError> {
        let live_ctx = Self::live(config)?;

        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let path = PathBuf::from(".imgtools/cassettes")
            .join(&timestamp)
            .join("generate_image.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            format!("{timestamp}-generate_image"),
            get_commit_hash(),
        )));

        let ctx = Self {
            generator: Box::new(RecordingImageGenerator::new(
                live_ctx.generator,
                Arc::clone(&recorder),
            )),
            downloader: Box::new(RecordingImageDownloader::new(
                live_ctx.downloader,
                Arc::clone(&recorder),
            )),
        };

        Ok((ctx, RecordingSession { recorder }))
    }

    /// Create a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be loaded.
    pub fn replaying(path: &Path) -> Result<Self, ImageError> {
        let replayer = load_cassette(path)
            .map_err(|e| ImageError::Config(format!("Failed to load cassette: {e}")))?;
        let replayer = Arc::new(Mutex::new(replayer));
        Ok(Self {
            generator: Box::new(ReplayingImageGenerator::new(Arc::clone(&replayer))),
            downloader: Box::new(ReplayingImageDownloader::new(replayer)),
        })
    }
}

/// Get the current git commit hash, or "unknown" if unavailable.
fn get_commit_hash() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string())
}
