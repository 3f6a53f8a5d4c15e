use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::{Error, Result};
use reqwest::Client;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Transport for Gemini's `generateContent` endpoint, bound to one model.
pub struct GeminiHttpClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiHttpClient {
    /// `model` may be given bare (`gemini-2.0-flash-001`) or as a
    /// `models/...` resource name; it is stored bare.
    pub fn new(http: Client, api_key: String, model: &str, timeout: Duration) -> Self {
        Self {
            http,
            api_key,
            model: bare_model_id(model).to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout,
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Send one prompt payload and decode the candidates envelope.
    ///
    /// Non-2xx statuses and undecodable bodies are `Error::AiProvider`;
    /// transport failures and timeouts are `Error::Http`.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        tracing::debug!("POST generateContent (model: {})", self.model);

        let response = self
            .http
            .post(self.endpoint())
            .timeout(self.timeout)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .inspect_err(|e| tracing::error!("Gemini request did not complete: {}", e))?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!("Gemini rejected request (status {}): {}", status, body);
            return Err(Error::AiProvider(format!(
                "Gemini API error (status {}): {}",
                status, body
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Undecodable Gemini response: {}\nBody: {}", e, body);
            Error::AiProvider(format!("Failed to parse Gemini response: {}", e))
        })
    }
}

fn bare_model_id(model: &str) -> &str {
    model.strip_prefix("models/").unwrap_or(model)
}
