//! Chat completion client
//!
//! The dispatcher only sees the [`CompletionClient`] trait, so tests can
//! substitute a scripted client for the HTTP one.

mod error;
mod openai;

pub use error::{CompletionError, CompletionResult};
pub use openai::OpenAIClient;

use crate::tokenizer::Model;

/// A single-message completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Model to run
    pub model: Model,
    /// Content of the one user message
    pub content: String,
}

/// Trait defining the interface for completion backends
pub trait CompletionClient {
    /// Send one request and return the text of the first choice carrying one
    ///
    /// `Ok(None)` means the API answered but no choice held a text message.
    fn complete(&self, request: &CompletionRequest) -> CompletionResult<Option<String>>;
}
