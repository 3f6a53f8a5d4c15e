//! Request handling for content generation.
//!
//! Turns a raw request body into a [`GenerationResult`]: parse, validate,
//! resolve the length range, compose the prompt, call the provider, and
//! measure the generated text.

use crate::ai::TextGenerationService;
use crate::models::{GenerationRequest, GenerationResult};
use crate::{prompts, Error, Result};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Required request keys, checked in this order.
pub const REQUIRED_FIELDS: [&str; 4] = ["topic", "tone", "contentType", "length"];

pub const NO_DATA_MESSAGE: &str = "No data provided";
pub const EMPTY_GENERATION_MESSAGE: &str = "AI failed to generate content";

/// Stateless handler over a shared, read-only provider handle.
#[derive(Clone)]
pub struct RequestHandler {
    provider: Arc<dyn TextGenerationService>,
}

impl RequestHandler {
    pub fn new(provider: Arc<dyn TextGenerationService>) -> Self {
        Self { provider }
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    /// Handle one raw request body end to end.
    pub async fn handle(&self, body: &[u8]) -> Result<GenerationResult> {
        let request = parse_request(body).inspect_err(|e| {
            warn!("Rejected generation request: {}", e);
        })?;

        let prompt = prompts::compose(&request);
        info!(
            "Generating content (model: {}, length: {})",
            self.provider.model(),
            request.length
        );

        let text = match self.provider.generate_text(&prompt).await {
            Ok(Some(text)) if !text.is_empty() => text,
            Ok(_) => {
                error!("Provider returned no content");
                return Err(Error::Generation(EMPTY_GENERATION_MESSAGE.to_string()));
            }
            Err(e) => {
                error!("Content generation failed: {}", e);
                return Err(Error::Generation(e.to_string()));
            }
        };

        let result = GenerationResult::success(text);
        info!(
            "Generated {} words ({} chars)",
            result.word_count.unwrap_or_default(),
            result.char_count.unwrap_or_default()
        );
        Ok(result)
    }
}

/// Parse and validate a raw body into a [`GenerationRequest`].
///
/// A missing, unparseable, non-object, or empty-object body is "No data
/// provided". Otherwise the first absent key from [`REQUIRED_FIELDS`] is
/// reported. Presence is the only check; `null` counts as present.
pub fn parse_request(body: &[u8]) -> Result<GenerationRequest> {
    let fields = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) if !fields.is_empty() => fields,
        _ => return Err(Error::Validation(NO_DATA_MESSAGE.to_string())),
    };

    validate_fields(fields)
}

fn validate_fields(mut fields: Map<String, Value>) -> Result<GenerationRequest> {
    if let Some(missing) = REQUIRED_FIELDS
        .iter()
        .find(|field| !fields.contains_key(**field))
    {
        return Err(Error::Validation(format!(
            "Missing required field {}",
            missing
        )));
    }

    let mut take = |key: &str| fields.remove(key).unwrap_or(Value::Null);

    Ok(GenerationRequest {
        topic: value_text(take("topic")),
        tone: value_text(take("tone")),
        content_type: value_text(take("contentType")),
        length: take("length"),
    })
}

/// Strings as their contents, everything else as compact JSON.
fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
