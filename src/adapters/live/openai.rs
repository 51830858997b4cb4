//! Live adapter for the `OpenAI` Images API.

use reqwest::Client;
use serde::Deserialize;

use crate::error::ImageError;
use crate::params::accepts_quality;
use crate::ports::image_generator::{
    GenerateFuture, GeneratedImage, ImageGenerator, ImageRequest, ImageResponse,
};

/// Default API base URL.
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Live `OpenAI` image generator that asks for hosted image URLs.
pub struct OpenAiGenerator {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiGenerator {
    /// Create a new `OpenAI` generator with the given API key.
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self { client: Client::new(), api_key, base_url: OPENAI_API_BASE.to_string() }
    }

    /// Point the generator at a different API base, e.g. a proxy.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/images/generations", self.base_url)
    }
}

/// Build the JSON request body for the images endpoint.
fn request_body(request: &ImageRequest) -> serde_json::Value {
    let mut body = serde_json::json!({
        "model": request.model,
        "prompt": request.prompt,
        "n": request.count,
        "size": request.size,
        "response_format": "url",
    });
    if accepts_quality(&request.model) {
        body["quality"] = serde_json::json!(request.quality);
    }
    body
}

impl ImageGenerator for OpenAiGenerator {
    fn generate(&self, request: &ImageRequest) -> GenerateFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            let url = self.endpoint();
            tracing::debug!(%url, model = %request.model, size = %request.size, "requesting image");

            let response = self
                .client
                .post(&url)
                .header("Authorization", format!("Bearer {}", self.api_key))
                .json(&request_body(&request))
                .send()
                .await?;

            let status = response.status();
            let response_text = response.text().await?;

            if !status.is_success() {
                return Err(ImageError::Api { status: status.as_u16(), message: response_text });
            }

            let parsed: OpenAiResponse = serde_json::from_str(&response_text).map_err(|e| {
                ImageError::Api { status: 200, message: format!("Failed to parse response: {e}") }
            })?;

            let images: Vec<GeneratedImage> = parsed
                .data
                .into_iter()
                .filter_map(|item| {
                    item.url.map(|url| GeneratedImage { url, revised_prompt: item.revised_prompt })
                })
                .collect();

            if images.is_empty() {
                let truncated: String = response_text.chars().take(500).collect();
                return Err(ImageError::Api {
                    status: 200,
                    message: format!("No image URL in response. Body: {truncated}"),
                });
            }

            Ok(ImageResponse { images })
        })
    }
}

// --- OpenAI API response types ---

#[derive(Deserialize)]
struct OpenAiResponse {
    data: Vec<OpenAiImageData>,
}

#[derive(Deserialize)]
struct OpenAiImageData {
    url: Option<String>,
    revised_prompt: Option<String>,
}
