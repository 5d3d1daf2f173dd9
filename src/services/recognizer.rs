use anyhow::Result;

use crate::models::Recognition;

/// Trait for food recognition backends (OpenAI, OpenRouter, test stubs, etc.)
#[async_trait::async_trait]
pub trait FoodRecognizer: Send + Sync {
    /// Identify the dominant food in an image given as a data URL or public URL
    async fn recognize(&self, image_url: &str) -> Result<Recognition>;
}
