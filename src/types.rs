/*!
 * Core types and data structures for the code-assistant application
 */

use std::fmt;
use std::path::PathBuf;

/// A collected source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Relative path from the codebase root
    pub path: PathBuf,
    /// Decoded file content
    pub content: String,
}

/// Why an eligible entry was left out of the context
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Reading the entry failed
    Unreadable(String),
    /// Symbolic link that leads back to one of its ancestors
    SymlinkLoop,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unreadable(e) => write!(f, "read error: {}", e),
            SkipReason::SymlinkLoop => write!(f, "symbolic link loop"),
        }
    }
}

/// An entry the collector skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    /// Path of the skipped entry
    pub path: PathBuf,
    /// Reason for skipping it
    pub reason: SkipReason,
}

/// All collected file contents joined with newlines, in traversal order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodebaseContext {
    text: String,
    files: usize,
}

impl CodebaseContext {
    /// Join the contents of `files`, consuming them one at a time
    pub fn from_files<I>(files: I) -> Self
    where
        I: IntoIterator<Item = SourceFile>,
    {
        let mut context = Self::default();
        for file in files {
            if context.files > 0 {
                context.text.push('\n');
            }
            context.text.push_str(&file.content);
            context.files += 1;
        }
        context
    }

    /// The joined text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of files joined
    pub fn file_count(&self) -> usize {
        self.files
    }

    /// Length in characters
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether no text was collected
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, content: &str) -> SourceFile {
        SourceFile {
            path: PathBuf::from(path),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_context_joins_with_newlines() {
        let context =
            CodebaseContext::from_files(vec![file("a.py", "a"), file("b.py", ""), file("c.py", "c")]);

        assert_eq!(context.as_str(), "a\n\nc");
        assert_eq!(context.file_count(), 3);
        assert_eq!(context.char_count(), 4);
    }

    #[test]
    fn test_empty_context() {
        let context = CodebaseContext::from_files(Vec::new());
        assert!(context.is_empty());
        assert_eq!(context.file_count(), 0);
    }
}
