//! Per-model validation of generation parameters.

/// Validate the output resolution for the given model.
///
/// # Errors
///
/// Returns an error if the model does not produce images of that size.
pub fn validate_size(model: &str, size: &str) -> Result<(), String> {
    let valid = valid_sizes(model);
    if valid.contains(&size) {
        Ok(())
    } else {
        Err(format!("Unsupported size '{size}' for {model}. Valid: {}", valid.join(", ")))
    }
}

/// Validate the quality tier for the given model.
///
/// # Errors
///
/// Returns an error if the quality value is not recognized.
pub fn validate_quality(model: &str, quality: &str) -> Result<(), String> {
    let valid = valid_qualities(model);
    if valid.contains(&quality) {
        Ok(())
    } else {
        Err(format!("Unsupported quality '{quality}' for {model}. Valid: {}", valid.join(", ")))
    }
}

/// Whether the API accepts a `quality` field for this model.
#[must_use]
pub fn accepts_quality(model: &str) -> bool {
    model == "dall-e-3"
}

fn valid_sizes(model: &str) -> &'static [&'static str] {
    match model {
        "dall-e-2" => &["256x256", "512x512", "1024x1024"],
        _ => &["1024x1024", "1792x1024", "1024x1792"],
    }
}

fn valid_qualities(model: &str) -> &'static [&'static str] {
    match model {
        "dall-e-2" => &["standard"],
        _ => &["standard", "hd"],
    }
}
