use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::models::{AnalyzeRequest, AnalyzeResponse, DEFAULT_GRAMS};
use crate::services::{calories, FoodRecognizer};

#[derive(Debug, Clone, PartialEq)]
pub enum AnalyzeError {
    /// Client sent an unusable body (400)
    BadRequest(String),
    /// Recognition or anything downstream failed (500)
    Internal(String),
}

impl fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzeError::BadRequest(msg) | AnalyzeError::Internal(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AnalyzeError {}

pub struct AnalyzeHandler {
    recognizer: Arc<dyn FoodRecognizer>,
}

impl AnalyzeHandler {
    pub fn new(recognizer: Arc<dyn FoodRecognizer>) -> Self {
        Self { recognizer }
    }

    /// Validate a raw JSON body into an [`AnalyzeRequest`]
    pub fn parse_request(body: &Value) -> Result<AnalyzeRequest, AnalyzeError> {
        let image = match body.get("image") {
            Some(Value::String(image)) if !image.is_empty() => image.clone(),
            _ => {
                return Err(AnalyzeError::BadRequest(
                    "Missing image (data URL)".to_string(),
                ))
            }
        };

        let grams = match body.get("grams") {
            None => Some(DEFAULT_GRAMS),
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            Some(_) => None,
        }
        .filter(|g| g.is_finite() && *g > 0.0)
        .ok_or_else(|| AnalyzeError::BadRequest("grams must be a positive number".to_string()))?;

        Ok(AnalyzeRequest { image, grams })
    }

    /// Recognize the food in the image and estimate its calories
    pub async fn analyze(&self, body: &Value) -> Result<AnalyzeResponse, AnalyzeError> {
        let request = Self::parse_request(body).map_err(|e| {
            log::warn!("⚠️ Rejected analyze request: {}", e);
            e
        })?;

        log::info!(
            "📸 Analyzing image ({} chars) for {} g",
            request.image.len(),
            request.grams
        );

        let recognition = self
            .recognizer
            .recognize(&request.image)
            .await
            .map_err(|e| {
                log::error!("❌ Food recognition failed: {:#}", e);
                AnalyzeError::Internal(format!("{:#}", e))
            })?;

        let label = calories::normalize(&recognition.label);
        let kcal_per100 = calories::kcal_per_100(&label);
        let kcal_estimate = calories::estimate(kcal_per100, request.grams);

        log::info!(
            "🍽️ Recognized '{}' (food={}, confidence={:.2}): {} kcal/100g, ~{} kcal",
            label,
            recognition.is_food,
            recognition.confidence,
            kcal_per100,
            kcal_estimate
        );

        Ok(AnalyzeResponse {
            label,
            is_food: recognition.is_food,
            confidence: recognition.confidence,
            kcal_per100,
            kcal_estimate,
        })
    }
}
