/*!
 * Gitignore-style exclusion for the file collector
 */

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::Result;

/// Matcher built from the ignore file at the codebase root
///
/// A matcher without an ignore file never excludes anything.
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    gitignore: Option<Gitignore>,
}

impl IgnoreMatcher {
    /// Matcher that excludes nothing
    pub fn none() -> Self {
        Self::default()
    }

    /// Load `root/<file_name>` if it exists
    ///
    /// Patterns that fail to parse are a fatal error.
    pub fn load(root: &Path, file_name: &str) -> Result<Self> {
        let path = root.join(file_name);
        if !path.is_file() {
            return Ok(Self::none());
        }

        let mut builder = GitignoreBuilder::new(root);
        if let Some(err) = builder.add(&path) {
            return Err(err.into());
        }

        Ok(Self {
            gitignore: Some(builder.build()?),
        })
    }

    /// Whether an ignore file was found
    pub fn is_active(&self) -> bool {
        self.gitignore.is_some()
    }

    /// Whether `path` should be excluded
    pub fn matches(&self, path: &Path) -> bool {
        self.matches_entry(path, path.is_dir())
    }

    /// Same as [`matches`](Self::matches) when the caller already knows the entry kind
    pub fn matches_entry(&self, path: &Path, is_dir: bool) -> bool {
        match &self.gitignore {
            Some(gitignore) => gitignore.matched(path, is_dir).is_ignore(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_ignore_file() {
        let temp_dir = tempdir().unwrap();
        let matcher = IgnoreMatcher::load(temp_dir.path(), ".gitignore").unwrap();

        assert!(!matcher.is_active());
        assert!(!matcher.matches(&temp_dir.path().join("anything.py")));
    }

    #[test]
    fn test_gitignore_semantics() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("build")).unwrap();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(
            root.join(".gitignore"),
            "# generated\n*.log\nbuild/\n/top.py\n!keep.log\n",
        )
        .unwrap();

        let matcher = IgnoreMatcher::load(root, ".gitignore").unwrap();
        assert!(matcher.is_active());

        assert!(matcher.matches_entry(&root.join("debug.log"), false));
        assert!(matcher.matches_entry(&root.join("src/trace.log"), false));
        assert!(!matcher.matches_entry(&root.join("keep.log"), false));
        assert!(matcher.matches(&root.join("build")));
        assert!(matcher.matches_entry(&root.join("top.py"), false));
        assert!(!matcher.matches_entry(&root.join("src/top.py"), false));
        assert!(!matcher.matches_entry(&root.join("src/main.py"), false));
    }

    #[test]
    fn test_directory_only_pattern() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::write(root.join(".gitignore"), "cache/\n").unwrap();

        let matcher = IgnoreMatcher::load(root, ".gitignore").unwrap();
        assert!(matcher.matches_entry(&root.join("cache"), true));
        assert!(!matcher.matches_entry(&root.join("cache"), false));
    }

    #[test]
    fn test_custom_file_name() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::write(root.join(".assistantignore"), "*.py\n").unwrap();

        let matcher = IgnoreMatcher::load(root, ".assistantignore").unwrap();
        assert!(matcher.matches_entry(&root.join("a.py"), false));

        let default = IgnoreMatcher::load(root, ".gitignore").unwrap();
        assert!(!default.matches_entry(&root.join("a.py"), false));
    }
}
