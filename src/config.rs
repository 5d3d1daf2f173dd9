use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
    pub port: u16,
    pub body_limit_bytes: usize,
}

impl Config {
    /// Load configuration from the process environment (and `.env` if present)
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let openai_api_key = lookup("OPENAI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .context("OPENAI_API_KEY must be set")?;

        let openai_model = lookup("OPENAI_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string());

        let openai_base_url = lookup("OPENAI_BASE_URL")
            .unwrap_or_else(|| "https://api.openai.com/v1".to_string());

        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".into())
            .parse::<u16>()
            .context("PORT must be a valid number between 0 and 65535")?;

        let body_limit_bytes = {
            let mb = lookup("BODY_LIMIT_MB")
                .unwrap_or_else(|| "10".into())
                .parse::<usize>()
                .context("BODY_LIMIT_MB must be a valid integer")?;
            mb.checked_mul(1024 * 1024)
                .context("BODY_LIMIT_MB too large")?
        };

        Ok(Self {
            openai_api_key,
            openai_model,
            openai_base_url,
            port,
            body_limit_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("OPENAI_API_KEY", "sk-test")]).unwrap();

        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.openai_model, "gpt-4o-mini");
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.body_limit_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_missing_api_key() {
        let err = load(&[]).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));

        assert!(load(&[("OPENAI_API_KEY", "  ")]).is_err());
    }

    #[test]
    fn test_overrides_and_invalid_numbers() {
        let config = load(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "meta-llama/llama-4-scout:free"),
            ("OPENAI_BASE_URL", "https://openrouter.ai/api/v1"),
            ("PORT", "8080"),
            ("BODY_LIMIT_MB", "2"),
        ])
        .unwrap();
        assert_eq!(config.openai_model, "meta-llama/llama-4-scout:free");
        assert_eq!(config.openai_base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.body_limit_bytes, 2 * 1024 * 1024);

        let err = load(&[("OPENAI_API_KEY", "sk-test"), ("PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_body_limit_overflow() {
        let huge = usize::MAX.to_string();
        let err = load(&[("OPENAI_API_KEY", "sk-test"), ("BODY_LIMIT_MB", &huge)]).unwrap_err();
        assert_eq!(err.to_string(), "BODY_LIMIT_MB too large");
    }
}
