/*!
 * Token and cost estimation for a codebase context
 */

use crate::tokenizer::{Model, Tokenizer, TokenizerResult};
use crate::utils::format_cost;

/// Token count and price preview for one blob of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenEstimate {
    /// Number of tokens under the model's encoding
    pub tokens: usize,
    /// Estimated input cost in dollars
    pub cost: f64,
    /// Model the estimate was computed for
    pub model: Model,
}

impl TokenEstimate {
    /// Cost formatted as dollars with two decimals
    pub fn formatted_cost(&self) -> String {
        format_cost(self.cost)
    }
}

/// Linear cost of `tokens` input tokens for `model`
pub fn cost_for(tokens: usize, model: Model) -> f64 {
    tokens as f64 * model.cost_per_token()
}

/// Count the tokens in `text` and price them
pub fn estimate(tokenizer: &dyn Tokenizer, text: &str) -> TokenizerResult<TokenEstimate> {
    let tokens = tokenizer.count_tokens(text)?;
    let model = tokenizer.model();

    Ok(TokenEstimate {
        tokens,
        cost: cost_for(tokens, model),
        model,
    })
}
