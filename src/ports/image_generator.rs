//! Image generator port for text-to-image APIs.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::ImageError;

/// A request to generate images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRequest {
    /// The resolved model identifier (e.g., `"dall-e-3"`).
    pub model: String,
    /// The text prompt describing the desired image.
    pub prompt: String,
    /// Output resolution (e.g., `"1024x1024"`).
    pub size: String,
    /// Quality tier (`"standard"`, `"hd"`).
    pub quality: String,
    /// Number of images to generate.
    pub count: u32,
}

/// A single generated image, hosted by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Temporary URL the image can be downloaded from.
    pub url: String,
    /// The prompt as rewritten by the provider, if it did so.
    #[serde(default)]
    pub revised_prompt: Option<String>,
}

/// Response containing generated images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResponse {
    /// The generated images.
    pub images: Vec<GeneratedImage>,
}

/// Boxed future type returned by [`ImageGenerator::generate`].
pub type GenerateFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ImageResponse, ImageError>> + Send + 'a>>;

/// Generates images from text prompts via an external API.
pub trait ImageGenerator: Send + Sync {
    /// Generate images for the given request.
    fn generate(&self, request: &ImageRequest) -> GenerateFuture<'_>;
}
