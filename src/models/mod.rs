use serde::{Deserialize, Serialize};

/// Default portion size when the client does not send `grams`
pub const DEFAULT_GRAMS: f64 = 150.0;

/// Structured answer from the recognition model (FoodDetection schema)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recognition {
    pub label: String,
    #[serde(rename = "isFood")]
    pub is_food: bool,
    pub confidence: f64,
}

/// Validated analyze request
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeRequest {
    pub image: String,
    pub grams: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub label: String,
    pub is_food: bool,
    pub confidence: f64,
    pub kcal_per100: u32,
    pub kcal_estimate: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognition_deserialization() {
        let json = r#"{"label": "Banana", "isFood": true, "confidence": 0.93}"#;
        let recognition: Recognition = serde_json::from_str(json).unwrap();

        assert_eq!(recognition.label, "Banana");
        assert!(recognition.is_food);
        assert_eq!(recognition.confidence, 0.93);
    }

    #[test]
    fn test_response_uses_camel_case_keys() {
        let response = AnalyzeResponse {
            label: "banana".to_string(),
            is_food: true,
            confidence: 0.9,
            kcal_per100: 89,
            kcal_estimate: 134,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["isFood"], true);
        assert_eq!(value["kcalPer100"], 89);
        assert_eq!(value["kcalEstimate"], 134);
        assert!(value.get("is_food").is_none());
    }
}
