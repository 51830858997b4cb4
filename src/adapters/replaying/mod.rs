//! Replaying adapters that serve recorded interactions from cassettes.

pub mod image_downloader;
pub mod image_generator;

use std::sync::{Arc, Mutex};

use crate::cassette::replayer::CassetteReplayer;
use crate::error::ImageError;

/// Retrieve the next recorded output for a given port and method.
pub(crate) fn next_output(
    replayer: &Arc<Mutex<CassetteReplayer>>,
    port: &str,
    method: &str,
) -> Result<serde_json::Value, ImageError> {
    let mut guard = replayer
        .lock()
        .map_err(|e| ImageError::Replay(format!("replayer lock poisoned: {e}")))?;
    guard.next_interaction(port, method).map(|i| i.output.clone()).map_err(ImageError::Replay)
}

/// Deserialize a replayed output as `Result<T, ImageError>`.
///
/// Recorded errors come back as [`ImageError::Replay`] carrying the recorded message.
pub(crate) fn replay_result<T: serde::de::DeserializeOwned>(
    output: serde_json::Value,
) -> Result<T, ImageError> {
    if let Some(err_val) = output.get("Err").or_else(|| output.get("err")) {
        let msg = err_val.as_str().unwrap_or("replayed error").to_string();
        return Err(ImageError::Replay(msg));
    }
    let value = match output.get("Ok").or_else(|| output.get("ok")) {
        Some(ok_val) => ok_val.clone(),
        None => output,
    };
    serde_json::from_value(value)
        .map_err(|e| ImageError::Replay(format!("malformed recorded output: {e}")))
}
