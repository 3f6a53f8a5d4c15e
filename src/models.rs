//! Data models and structures
//!
//! Defines the request and result payloads of the generate endpoint, the
//! length-category lookup, and process configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-001";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A validated content-generation request.
///
/// Field values are kept as the text that will be interpolated into the
/// prompt; `length` keeps the raw JSON value so range lookup only matches
/// real strings.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub topic: String,
    pub tone: String,
    pub content_type: String,
    pub length: Value,
}

impl GenerationRequest {
    pub fn length_range(&self) -> LengthRange {
        match self.length.as_str() {
            Some(length) => LengthRange::for_length(length),
            None => LengthRange::DEFAULT,
        }
    }
}

/// Target word-count range derived from a length category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    pub min_words: u32,
    pub max_words: u32,
}

impl LengthRange {
    pub const SMALL: LengthRange = LengthRange {
        min_words: 50,
        max_words: 100,
    };
    pub const MEDIUM: LengthRange = LengthRange {
        min_words: 100,
        max_words: 200,
    };
    pub const DEFAULT: LengthRange = LengthRange {
        min_words: 200,
        max_words: 300,
    };

    /// Exact, case-sensitive match; anything unrecognised gets the default.
    pub fn for_length(length: &str) -> Self {
        match length {
            "medium" => Self::MEDIUM,
            "small" => Self::SMALL,
            _ => Self::DEFAULT,
        }
    }
}

/// Response payload for `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResult {
    pub fn success(text: String) -> Self {
        Self {
            success: true,
            word_count: Some(word_count(&text)),
            char_count: Some(char_count(&text)),
            response: Some(text),
            error: None,
        }
    }

    pub fn failure(error: String) -> Self {
        Self {
            success: false,
            response: None,
            word_count: None,
            char_count: None,
            error: Some(error),
        }
    }
}

/// Number of whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Length in characters, not bytes.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub model: String,
    pub timeout: Duration,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let google_api_key = lookup("GOOGLE_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| crate::Error::Config("GOOGLE_API_KEY not set".to_string()))?;

        let timeout_secs = match lookup("GENERATION_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                crate::Error::Config(format!("Invalid GENERATION_TIMEOUT_SECS '{}'", raw))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| crate::Error::Config(format!("Invalid PORT '{}'", raw)))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            google_api_key,
            model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_length_range_lookup() {
        assert_eq!(LengthRange::for_length("medium"), LengthRange::MEDIUM);
        assert_eq!(LengthRange::for_length("small"), LengthRange::SMALL);
        assert_eq!(LengthRange::for_length("large"), LengthRange::DEFAULT);
        assert_eq!(LengthRange::for_length(""), LengthRange::DEFAULT);
        assert_eq!(LengthRange::for_length("MEDIUM"), LengthRange::DEFAULT);
        assert_eq!(LengthRange::for_length(" small"), LengthRange::DEFAULT);
    }

    #[test]
    fn test_non_string_length_uses_default_range() {
        let request = GenerationRequest {
            topic: "cats".to_string(),
            tone: "formal".to_string(),
            content_type: "email".to_string(),
            length: json!(100),
        };
        assert_eq!(request.length_range(), LengthRange::DEFAULT);
    }

    #[test]
    fn test_counts() {
        assert_eq!(word_count("Hello world"), 2);
        assert_eq!(char_count("Hello world"), 11);
        assert_eq!(word_count("  spaced\tout\nwords  "), 3);
        assert_eq!(word_count(""), 0);
        assert_eq!(char_count("café"), 4);
    }

    #[test]
    fn test_success_serialization() {
        let json = serde_json::to_value(GenerationResult::success("Hello world".to_string()))
            .unwrap();
        assert_eq!(
            json,
            json!({
                "success": true,
                "response": "Hello world",
                "wordCount": 2,
                "charCount": 11
            })
        );
    }

    #[test]
    fn test_failure_serialization() {
        let json = serde_json::to_value(GenerationResult::failure("boom".to_string())).unwrap();
        assert_eq!(json, json!({ "success": false, "error": "boom" }));
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup_from(&[("GOOGLE_API_KEY", "key")])).unwrap();
        assert_eq!(config.google_api_key, "key");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("GOOGLE_API_KEY", "key"),
            ("GEMINI_MODEL", "gemini-2.5-flash"),
            ("GENERATION_TIMEOUT_SECS", "5"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
        ]))
        .unwrap();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_config_requires_api_key() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("GOOGLE_API_KEY"));
    }

    #[test]
    fn test_config_rejects_bad_port() {
        let err = Config::from_lookup(lookup_from(&[("GOOGLE_API_KEY", "key"), ("PORT", "http")]))
            .unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }
}
