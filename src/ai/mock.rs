use super::TextGenerationService;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

const MOCK_MODEL: &str = "mock-text-model";

#[derive(Debug, Clone)]
enum Behavior {
    Respond,
    NoText,
    Fail(String),
}

pub struct MockTextClient {
    responses: Arc<Mutex<Vec<String>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
    behavior: Behavior,
}

impl MockTextClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
            behavior: Behavior::Respond,
        }
    }

    pub fn with_response(self, response: String) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    /// Every call answers with no text.
    pub fn with_no_text(mut self) -> Self {
        self.behavior = Behavior::NoText;
        self
    }

    /// Every call fails with an `AiProvider` error carrying `message`.
    pub fn with_failure(mut self, message: String) -> Self {
        self.behavior = Behavior::Fail(message);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockTextClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerationService for MockTextClient {
    async fn generate_text(&self, prompt: &str) -> Result<Option<String>> {
        let count = {
            let mut count = self.call_count.lock().unwrap();
            *count += 1;
            *count
        };
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &self.behavior {
            Behavior::NoText => Ok(None),
            Behavior::Fail(message) => Err(Error::AiProvider(message.clone())),
            Behavior::Respond => {
                let responses = self.responses.lock().unwrap();
                if responses.is_empty() {
                    // Default mock response
                    Ok(Some(format!("Generated content for: {}", prompt)))
                } else {
                    let index = (count - 1) % responses.len();
                    Ok(Some(responses[index].clone()))
                }
            }
        }
    }

    fn model(&self) -> &str {
        MOCK_MODEL
    }
}
