//! Recording adapters that capture interactions to cassettes.

pub mod image_downloader;
pub mod image_generator;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

/// Record a `Result<T, E>` interaction using the Ok/Err JSON convention.
///
/// Recording is best effort: a value that fails to serialize is stored as
/// `null` and a poisoned lock skips the interaction, both with a warning.
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize + ?Sized,
{
    let input_json = to_json(input, port, method);

    let output_json = match result {
        Ok(v) => serde_json::json!({ "Ok": to_json(v, port, method) }),
        Err(e) => serde_json::json!({ "Err": e.to_string() }),
    };

    match recorder.lock() {
        Ok(mut guard) => guard.record(port, method, input_json, output_json),
        Err(e) => tracing::warn!("recorder lock poisoned, dropping {port}::{method}: {e}"),
    }
}

fn to_json<V: Serialize + ?Sized>(value: &V, port: &str, method: &str) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        tracing::warn!("failed to serialize {port}::{method} for recording: {e}");
        serde_json::Value::Null
    })
}
