//! OpenAI chat completions client

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::{CompletionClient, CompletionError, CompletionRequest, CompletionResult};
use crate::config::CompletionConfig;

/// Sampling temperature sent with every request
const TEMPERATURE: f32 = 0.8;

/// Number of choices requested per completion
const CHOICES: u32 = 1;

/// Blocking client for the `/chat/completions` endpoint
pub struct OpenAIClient {
    config: CompletionConfig,
    max_tokens: u32,
    client: Client,
}

impl OpenAIClient {
    /// Create a new client from explicit connection settings
    ///
    /// `max_tokens` caps the length of every reply.
    pub fn new(config: CompletionConfig, max_tokens: u32) -> CompletionResult<Self> {
        // No client-side timeout
        let client = Client::builder().timeout(None::<Duration>).build()?;

        Ok(Self {
            config,
            max_tokens,
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
    n: u32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Extract the first textual choice from a chat completion body
fn parse_completion(body: &str) -> CompletionResult<Option<String>> {
    let response: ChatResponse = serde_json::from_str(body)?;

    Ok(response
        .choices
        .into_iter()
        .find_map(|choice| choice.message.and_then(|m| m.content)))
}

/// Pull the human-readable message out of an error body, if it has one
fn parse_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}

impl CompletionClient for OpenAIClient {
    fn complete(&self, request: &CompletionRequest) -> CompletionResult<Option<String>> {
        let body = ChatRequest {
            model: request.model.model_id(),
            messages: [ChatMessage {
                role: "user",
                content: &request.content,
            }],
            temperature: TEMPERATURE,
            n: CHOICES,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            return Err(CompletionError::ApiError {
                status: status.as_u16(),
                message: parse_error_message(&text),
            });
        }

        parse_completion(&text)
    }
}
