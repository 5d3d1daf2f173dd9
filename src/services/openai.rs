use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::models::Recognition;
use crate::services::recognizer::FoodRecognizer;

const PROMPT: &str = "Identify the dominant edible food in the image. \
                      Return strict JSON {label:string, isFood:boolean, confidence:number 0..1}. \
                      If no food, isFood=false and label='none'.";

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ContentPart {
    Text {
        #[serde(rename = "type")]
        content_type: String,
        text: String,
    },
    ImageUrl {
        #[serde(rename = "type")]
        content_type: String,
        image_url: ImageData,
    },
}

#[derive(Debug, Serialize)]
struct ImageData {
    url: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Debug, Deserialize)]
struct MessageContent {
    content: Option<String>,
}

/// Strict JSON schema the model must answer with
fn food_detection_format() -> serde_json::Value {
    json!({
        "type": "json_schema",
        "json_schema": {
            "name": "FoodDetection",
            "strict": true,
            "schema": {
                "type": "object",
                "properties": {
                    "label": { "type": "string" },
                    "isFood": { "type": "boolean" },
                    "confidence": { "type": "number" }
                },
                "required": ["label", "isFood", "confidence"],
                "additionalProperties": false
            }
        }
    })
}

/// Recognizer backed by an OpenAI-compatible chat completions endpoint
pub struct OpenAIRecognizer {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAIRecognizer {
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self {
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn build_request(&self, image_url: &str) -> ChatRequest {
        let messages = vec![ChatMessage {
            role: "user".to_string(),
            content: vec![
                ContentPart::Text {
                    content_type: "text".to_string(),
                    text: PROMPT.to_string(),
                },
                ContentPart::ImageUrl {
                    content_type: "image_url".to_string(),
                    image_url: ImageData {
                        url: image_url.to_string(),
                    },
                },
            ],
        }];

        ChatRequest {
            model: self.model.clone(),
            messages,
            response_format: food_detection_format(),
        }
    }

    pub(crate) fn parse_content(content: &str) -> Result<Recognition> {
        serde_json::from_str(content.trim())
            .with_context(|| format!("Invalid FoodDetection JSON from model: {}", content))
    }
}

#[async_trait::async_trait]
impl FoodRecognizer for OpenAIRecognizer {
    async fn recognize(&self, image_url: &str) -> Result<Recognition> {
        log::debug!(
            "🖼️ Image URL: {}... (first 100 chars)",
            image_url.chars().take(100).collect::<String>()
        );

        let request = self.build_request(image_url);
        let url = format!("{}/chat/completions", self.base_url);

        log::info!("🤖 Sending recognition request with model: {}", self.model);
        log::debug!("📤 Request payload size: {} bytes", serde_json::to_string(&request)?.len());

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        log::debug!("📥 Recognition response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await?;
            log::error!("❌ OpenAI API error response: {}", error_text);
            anyhow::bail!("OpenAI API error ({}): {}", status, error_text);
        }

        let chat_response: ChatResponse = response.json().await?;
        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .context("OpenAI response contained no message content")?;

        log::info!("💬 Recognition content: {}", content);

        Self::parse_content(&content)
    }
}
