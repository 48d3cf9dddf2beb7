/*!
 * code-assistant - Ask an LLM about a whole codebase
 *
 * This library collects the source files of a directory tree, estimates the
 * token cost of sending them as context, and submits them in fixed-size
 * chunks together with a user prompt to a chat completion API.
 */

pub mod chunker;
pub mod client;
pub mod collector;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod estimate;
pub mod matcher;
pub mod report;
pub mod session;
pub mod tokenizer;
pub mod types;
pub mod utils;


// Re-export main components for easier access
pub use client::{CompletionClient, CompletionRequest, OpenAIClient};
pub use collector::{CollectorStatistics, FileCollector};
pub use config::{CompletionConfig, Config, SupportedExtensions};
pub use dispatch::{DispatchOutcome, Dispatcher, ResponsePart};
pub use error::{AssistantError, Result};
pub use estimate::{estimate, TokenEstimate};
pub use matcher::IgnoreMatcher;
pub use report::{assemble_responses, CollectionReport, Reporter};
pub use session::{Session, SessionOutcome};
pub use tokenizer::{Model, Tokenizer};
pub use types::{CodebaseContext, SkipReason, SkippedFile, SourceFile};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
