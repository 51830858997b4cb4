//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::DEFAULT_MODEL;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "IMGTOOLS_CONFIG";

/// Environment variable holding the `OpenAI` API key.
pub const OPENAI_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Environment variable overriding the `OpenAI` API base URL.
pub const OPENAI_BASE_URL_ENV_VAR: &str = "OPENAI_BASE_URL";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// API key configuration.
    #[serde(default)]
    pub keys: KeysConfig,

    /// API endpoint configuration.
    #[serde(default)]
    pub api: ApiConfig,

    /// Defaults for `display-image`.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Defaults for `generate-image`.
    #[serde(default)]
    pub generate: GenerateConfig,

    /// Defaults for `img2ascii`.
    #[serde(default)]
    pub ascii: AsciiConfig,
}

/// API key configuration.
#[derive(Debug, Default, Deserialize)]
pub struct KeysConfig {
    /// `OpenAI` API key.
    pub openai: Option<String>,
}

/// API endpoint configuration.
#[derive(Debug, Default, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the `OpenAI` API, e.g. `https://api.openai.com/v1`.
    pub base_url: Option<String>,
}

/// Defaults for the terminal display program.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Renderer invoked through the shell.
    pub command: String,
    /// Image name, resolved against `~/Desktop` unless absolute.
    pub image: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { command: "imgcat".to_string(), image: "cat.png".to_string() }
    }
}

/// Defaults for the image generation program.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Model name or alias.
    pub model: String,
    /// Output resolution.
    pub size: String,
    /// Quality tier.
    pub quality: String,
    /// Output file path.
    pub output: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            size: "1024x1024".to_string(),
            quality: "standard".to_string(),
            output: "generated_image.png".to_string(),
        }
    }
}

/// Defaults for the ASCII converter.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AsciiConfig {
    /// Image name, resolved against `~/Desktop` unless absolute.
    pub image: String,
    /// Output width in characters.
    pub columns: u32,
    /// Character height-to-width ratio used to correct the aspect ratio.
    pub width_ratio: f32,
    /// Emit plain characters without ANSI colour.
    pub monochrome: bool,
    /// Fit the width to the terminal instead of using `columns`.
    pub fit: bool,
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            image: "milk.png".to_string(),
            columns: 169,
            width_ratio: 2.2,
            monochrome: true,
            fit: false,
        }
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Get the `OpenAI` API key, preferring environment variable.
    #[must_use]
    pub fn openai_key(&self) -> Option<String> {
        std::env::var(OPENAI_KEY_ENV_VAR)
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| self.keys.openai.clone())
    }

    /// Get the `OpenAI` base URL override, preferring environment variable.
    #[must_use]
    pub fn openai_base_url(&self) -> Option<String> {
        std::env::var(OPENAI_BASE_URL_ENV_VAR)
            .ok()
            .filter(|u| !u.is_empty())
            .or_else(|| self.api.base_url.clone())
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `IMGTOOLS_CONFIG` environment variable
/// 3. `<config dir>/imgtools/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(p);
    }

    default_config_path()
}

fn default_config_path() -> PathBuf {
    dirs::config_dir().map_or_else(
        || PathBuf::from("imgtools.toml"),
        |dir| dir.join("imgtools").join("config.toml"),
    )
}
