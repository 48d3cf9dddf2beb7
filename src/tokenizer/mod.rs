//! Tokenizer module for token counting with OpenAI chat models
//!
//! Token counts drive the cost preview shown before anything is sent.

mod error;
mod model;
mod openai;

// Re-exports for public API
pub use error::{TokenizerError, TokenizerResult};
pub use model::Model;
pub use openai::TiktokenTokenizer;

/// Trait defining the interface for tokenizers
pub trait Tokenizer {
    /// Count tokens in the given text
    fn count_tokens(&self, text: &str) -> TokenizerResult<usize>;

    /// The model whose encoding this tokenizer applies
    fn model(&self) -> Model;
}

/// Create the tokenizer for the specified model
pub fn create_tokenizer(model: Model) -> Box<dyn Tokenizer> {
    Box::new(TiktokenTokenizer::new(model))
}
