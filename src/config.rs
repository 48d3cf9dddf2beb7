/*!
 * Configuration handling for code-assistant
 */

use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;
use serde::Deserialize;

use crate::error::Result;
use crate::tokenizer::Model;
use crate::{bail, ensure};

/// Default name of the extensions allow-list, resolved against the working directory
pub const DEFAULT_EXTENSIONS_FILE: &str = "supported_extensions.json";

/// Default ignore file looked up at the root of the codebase
pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";

/// Default maximum chunk length, in characters
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Default upper bound on the length of each reply, in tokens
pub const DEFAULT_MAX_TOKENS: u32 = 150;

/// Environment variable holding the completion API key
pub const API_KEY_VAR: &str = "OPEN_AI_API_KEY";

/// Environment variable overriding the completion API base URL
pub const BASE_URL_VAR: &str = "OPEN_AI_BASE_URL";

/// Base URL used when no override is set
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Command-line arguments for code-assistant
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "code-assistant",
    version = env!("CARGO_PKG_VERSION"),
    about = "Estimate the token cost of a codebase and ask an LLM about it",
    long_about = "Collects the source files of a codebase, estimates how many tokens they cost, and on confirmation sends them in chunks together with your prompt to a chat completion API."
)]
pub struct Args {
    /// Path to the codebase to process
    #[clap(required_unless_present = "generate")]
    pub directory_path: Option<String>,

    /// JSON file listing the supported file extensions
    #[clap(long, default_value = DEFAULT_EXTENSIONS_FILE)]
    pub extensions_file: String,

    /// Name of the ignore file looked up at the codebase root
    #[clap(long, default_value = DEFAULT_IGNORE_FILE)]
    pub ignore_file: String,

    /// Chat model used for token counting and completions
    #[clap(long, value_enum, default_value_t = Model::default())]
    pub model: Model,

    /// Maximum number of characters sent per request
    #[clap(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Maximum number of tokens in each reply
    #[clap(long, default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    /// Print a table of collection statistics before the estimate
    #[clap(long)]
    pub summary: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Codebase root to traverse
    pub target_dir: PathBuf,

    /// Path of the extensions allow-list
    pub extensions_file: PathBuf,

    /// Ignore file name at the codebase root
    pub ignore_file: String,

    /// Chat model
    pub model: Model,

    /// Maximum chunk length in characters
    pub chunk_size: usize,

    /// Reply length limit in tokens
    pub max_tokens: u32,

    /// Whether to print the statistics table
    pub summary: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            target_dir: PathBuf::from(args.directory_path.unwrap_or_default()),
            extensions_file: PathBuf::from(args.extensions_file),
            ignore_file: args.ignore_file,
            model: args.model,
            chunk_size: args.chunk_size,
            max_tokens: args.max_tokens,
            summary: args.summary,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.target_dir.is_dir() {
            bail!(
                PathNotFound,
                "Target directory not found: {}",
                self.target_dir.display()
            );
        }

        ensure!(
            self.chunk_size > 0,
            Config,
            "Chunk size must be greater than zero"
        );

        ensure!(
            self.max_tokens > 0,
            Config,
            "Max tokens must be greater than zero"
        );

        Ok(())
    }
}

#[derive(Deserialize)]
struct ExtensionsFile {
    extensions: Vec<String>,
}

/// Allow-list of file suffixes eligible for collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportedExtensions(HashSet<String>);

impl SupportedExtensions {
    /// Load the allow-list from a JSON file of the form `{"extensions": [".py", ...]}`
    pub fn load(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => bail!(
                Config,
                "Failed to read extensions file {}: {}",
                path.display(),
                e
            ),
        };

        Self::from_json(&raw)
    }

    /// Parse the allow-list from its JSON representation
    pub fn from_json(raw: &str) -> Result<Self> {
        let file: ExtensionsFile = serde_json::from_str(raw)?;
        Ok(Self(file.extensions.into_iter().collect()))
    }

    /// Whether `suffix` (including the leading dot) is allowed
    pub fn contains(&self, suffix: &str) -> bool {
        self.0.contains(suffix)
    }

    /// Number of allowed suffixes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the allow-list is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SupportedExtensions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Connection settings for the completion API
#[derive(Clone)]
pub struct CompletionConfig {
    /// Bearer credential
    pub api_key: String,
    /// Base URL, without a trailing slash
    pub base_url: String,
}

impl CompletionConfig {
    /// Build the client settings from the process environment
    pub fn from_env() -> Result<Self> {
        let api_key = match env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => key,
            _ => bail!(Config, "{} environment variable not set", API_KEY_VAR),
        };

        let base_url = env::var(BASE_URL_VAR)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

// Keep the key out of debug output
impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssistantError;
    use clap::CommandFactory;
    use tempfile::tempdir;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_requires_exactly_one_directory() {
        assert!(Args::try_parse_from(["code-assistant"]).is_err());
        assert!(Args::try_parse_from(["code-assistant", "a", "b"]).is_err());

        let args = Args::try_parse_from(["code-assistant", "src"]).unwrap();
        assert_eq!(args.directory_path.as_deref(), Some("src"));
        assert_eq!(args.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(args.model, Model::Gpt35Turbo);
        assert_eq!(args.max_tokens, DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn test_max_tokens_flag() {
        let args =
            Args::try_parse_from(["code-assistant", "--max-tokens", "512", "src"]).unwrap();
        assert_eq!(Config::from_args(args).max_tokens, 512);

        assert!(Args::try_parse_from(["code-assistant", "--max-tokens", "-1", "src"]).is_err());
    }

    #[test]
    fn test_generate_does_not_need_directory() {
        let args = Args::try_parse_from(["code-assistant", "--generate", "bash"]).unwrap();
        assert!(args.directory_path.is_none());
        assert_eq!(args.generate, Some(Shell::Bash));
    }

    #[test]
    fn test_validate() {
        let temp_dir = tempdir().unwrap();
        let args = Args::try_parse_from([
            "code-assistant",
            temp_dir.path().to_str().unwrap(),
        ])
        .unwrap();
        let mut config = Config::from_args(args);
        assert!(config.validate().is_ok());

        config.chunk_size = 0;
        assert!(matches!(config.validate(), Err(AssistantError::Config(_))));

        config.chunk_size = 10;
        config.max_tokens = 0;
        assert!(matches!(config.validate(), Err(AssistantError::Config(_))));

        config.max_tokens = DEFAULT_MAX_TOKENS;
        config.target_dir = temp_dir.path().join("missing");
        assert!(matches!(
            config.validate(),
            Err(AssistantError::PathNotFound(_))
        ));
    }

    #[test]
    fn test_load_extensions() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join(DEFAULT_EXTENSIONS_FILE);
        fs::write(&path, r#"{"extensions": [".py", ".go", ".rs"]}"#).unwrap();

        let extensions = SupportedExtensions::load(&path).unwrap();
        assert_eq!(extensions.len(), 3);
        assert!(extensions.contains(".py"));
        assert!(!extensions.contains(".txt"));
        assert!(!extensions.contains("py"));
    }

    #[test]
    fn test_missing_extensions_file() {
        let temp_dir = tempdir().unwrap();
        let result = SupportedExtensions::load(&temp_dir.path().join("nope.json"));
        assert!(matches!(result, Err(AssistantError::Config(_))));
    }

    #[test]
    fn test_malformed_extensions_file() {
        assert!(matches!(
            SupportedExtensions::from_json("{\"ext\": []}"),
            Err(AssistantError::Json(_))
        ));
        assert!(matches!(
            SupportedExtensions::from_json("not json"),
            Err(AssistantError::Json(_))
        ));
    }
}
