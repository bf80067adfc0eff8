//! Blocking HTTP client for an OpenAI-compatible chat-completions API.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use ember_core::config::CoachingConfig;
use ember_core::errors::{EmberError, EmberResult};
use ember_core::models::{GenerationOptions, GenerationOutcome};
use ember_core::traits::ITextGenerator;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// [`ITextGenerator`] over a chat-completions endpoint.
///
/// Every failure mode (connect error, timeout, non-2xx status, malformed
/// body, empty completion) is folded into `GenerationOutcome::failed`.
pub struct HttpTextGenerator {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpTextGenerator {
    pub fn new(config: &CoachingConfig) -> EmberResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EmberError::Config {
                reason: format!("http client: {e}"),
            })?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    fn request(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, String> {
        let body = ChatRequest {
            model: &options.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .map_err(|e| format!("request: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("status {status}"));
        }

        let parsed: ChatResponse = response.json().map_err(|e| format!("decode: {e}"))?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err("empty completion".to_string());
        }
        Ok(content)
    }
}

impl ITextGenerator for HttpTextGenerator {
    fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: &GenerationOptions,
    ) -> GenerationOutcome {
        match self.request(system_prompt, user_prompt, options) {
            Ok(content) => GenerationOutcome::ok(content),
            Err(error) => {
                tracing::debug!(%error, "text generation failed");
                GenerationOutcome::failed(error)
            }
        }
    }
}
