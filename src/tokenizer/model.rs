//! Model definitions and metadata

use clap::ValueEnum;
use strum::{Display, EnumIter, EnumProperty};

/// Chat models the codebase can be sent to
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumIter,
    Display,
    ValueEnum,
    EnumProperty,
)]
pub enum Model {
    #[default]
    #[strum(props(
        model_id = "gpt-3.5-turbo",
        price_per_1k = "0.002",
        context_window = "16385"
    ))]
    Gpt35Turbo,

    #[strum(props(model_id = "gpt-4", price_per_1k = "0.03", context_window = "8192"))]
    Gpt4,

    #[strum(props(
        model_id = "gpt-4-turbo",
        price_per_1k = "0.01",
        context_window = "128000"
    ))]
    Gpt4Turbo,

    #[strum(props(model_id = "gpt-4o", price_per_1k = "0.0025", context_window = "128000"))]
    Gpt4o,

    #[strum(props(
        model_id = "gpt-4o-mini",
        price_per_1k = "0.00015",
        context_window = "128000"
    ))]
    Gpt4oMini,
}

impl Model {
    /// Get the model identifier as used by the completion API
    pub fn model_id(&self) -> &'static str {
        self.get_str("model_id").unwrap_or("unknown")
    }

    /// Input price in dollars per 1000 tokens
    pub fn price_per_1k(&self) -> f64 {
        self.get_str("price_per_1k")
            .and_then(|p| p.parse().ok())
            .unwrap_or(0.0)
    }

    /// Input price in dollars for a single token
    pub fn cost_per_token(&self) -> f64 {
        self.price_per_1k() / 1000.0
    }

    /// Get the context window size for this model
    pub fn context_window(&self) -> usize {
        self.get_str("context_window")
            .and_then(|w| w.parse().ok())
            .unwrap_or(0)
    }
}
