//! Model name resolution.

/// The default generation model.
pub const DEFAULT_MODEL: &str = "dall-e-3";

/// Models served by the images endpoint with URL responses.
pub const SUPPORTED_MODELS: &[&str] = &["dall-e-3", "dall-e-2"];

/// Short name aliases.
const ALIASES: &[(&str, &str)] = &[
    ("dalle3", "dall-e-3"),
    ("dalle-3", "dall-e-3"),
    ("dalle2", "dall-e-2"),
    ("dalle-2", "dall-e-2"),
];

/// Resolve a model name (alias or exact) to the full model identifier.
#[must_use]
pub fn resolve_model(name: &str) -> String {
    for &(alias, full) in ALIASES {
        if name == alias {
            return full.to_string();
        }
    }
    name.to_string()
}

/// Check that a resolved model name is one we know how to call.
///
/// # Errors
///
/// Returns an error naming the supported models otherwise.
pub fn validate_model(model: &str) -> Result<(), String> {
    if SUPPORTED_MODELS.contains(&model) {
        Ok(())
    } else {
        Err(format!("Unsupported model '{model}'. Expected one of {SUPPORTED_MODELS:?}."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_aliases() {
        assert_eq!(resolve_model("dalle3"), "dall-e-3");
        assert_eq!(resolve_model("dalle-3"), "dall-e-3");
        assert_eq!(resolve_model("dalle2"), "dall-e-2");
    }

    #[test]
    fn resolve_exact_name_passthrough() {
        assert_eq!(resolve_model("dall-e-3"), "dall-e-3");
        assert_eq!(resolve_model("something-else"), "something-else");
    }

    #[test]
    fn validate_known_and_unknown() {
        assert!(validate_model(DEFAULT_MODEL).is_ok());
        assert!(validate_model("dall-e-2").is_ok());
        assert!(validate_model("gpt-image-1").is_err());
        assert!(validate_model("dalle3").is_err());
    }
}
