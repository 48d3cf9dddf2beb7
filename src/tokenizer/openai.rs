//! OpenAI tokenizer implementation using tiktoken

use once_cell::sync::OnceCell;
use tiktoken_rs::CoreBPE;

use super::Tokenizer;
use crate::tokenizer::error::{TokenizerError, TokenizerResult};
use crate::tokenizer::model::Model;

/// Tiktoken-backed tokenizer for OpenAI chat models
pub struct TiktokenTokenizer {
    model: Model,
    encoding: OnceCell<CoreBPE>,
}

impl TiktokenTokenizer {
    /// Create a new tokenizer; the BPE ranks are loaded on first use
    pub fn new(model: Model) -> Self {
        Self {
            model,
            encoding: OnceCell::new(),
        }
    }

    fn encoding(&self) -> TokenizerResult<&CoreBPE> {
        self.encoding.get_or_try_init(|| {
            tiktoken_rs::get_bpe_from_model(self.model.model_id()).map_err(|e| {
                TokenizerError::UnsupportedModel(format!("{}: {}", self.model.model_id(), e))
            })
        })
    }
}

impl Tokenizer for TiktokenTokenizer {
    fn count_tokens(&self, text: &str) -> TokenizerResult<usize> {
        if text.is_empty() {
            return Ok(0);
        }
        Ok(self.encoding()?.encode_ordinary(text).len())
    }

    fn model(&self) -> Model {
        self.model
    }
}
