//! AI service integration for text generation
//!
//! Defines the provider seam used by the request handler and ships the
//! Gemini implementation plus an in-memory mock for tests and harnesses.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiTextClient;
pub use mock::MockTextClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TextGenerationService: Send + Sync {
    /// Generate text for `prompt`.
    ///
    /// `Ok(None)` means the provider answered but produced no text.
    async fn generate_text(&self, prompt: &str) -> Result<Option<String>>;

    /// Model identifier used for every call.
    fn model(&self) -> &str;
}
