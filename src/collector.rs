/*!
 * Directory traversal and source file collection
 */

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::SupportedExtensions;
use crate::matcher::IgnoreMatcher;
use crate::report::FileReportInfo;
use crate::types::{SkipReason, SkippedFile, SourceFile};
use crate::utils::file_suffix;

/// Collector statistics
#[derive(Debug, Clone, Default)]
pub struct CollectorStatistics {
    /// Number of files collected
    pub files_collected: usize,
    /// Total number of lines
    pub total_lines: usize,
    /// Total number of characters
    pub total_chars: usize,
    /// Details for each collected file, in traversal order
    pub file_details: Vec<FileReportInfo>,
    /// Eligible entries that were skipped
    pub skipped: Vec<SkippedFile>,
}

/// Lazy depth-first iterator over the eligible files of a codebase
///
/// Entries the matcher excludes are pruned together with their subtree.
/// Files that cannot be read as text are reported on stderr and skipped.
pub struct FileCollector {
    root: PathBuf,
    extensions: SupportedExtensions,
    entries: Box<dyn Iterator<Item = walkdir::Result<DirEntry>>>,
    statistics: CollectorStatistics,
}

impl FileCollector {
    /// Create a collector rooted at `root`
    pub fn new(root: &Path, extensions: SupportedExtensions, matcher: IgnoreMatcher) -> Self {
        let entries = WalkDir::new(root)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                !matcher.matches_entry(entry.path(), entry.file_type().is_dir())
            });

        Self {
            root: root.to_path_buf(),
            extensions,
            entries: Box::new(entries),
            statistics: CollectorStatistics::default(),
        }
    }

    /// Get collector statistics
    pub fn statistics(&self) -> &CollectorStatistics {
        &self.statistics
    }

    /// Check if a file is eligible based on its suffix
    pub fn is_supported(&self, path: &Path) -> bool {
        file_suffix(path).is_some_and(|suffix| self.extensions.contains(&suffix))
    }

    fn relative_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root).unwrap_or(path).to_path_buf()
    }

    fn skip(&mut self, path: PathBuf, reason: SkipReason) {
        eprintln!("Warning: Ignoring {}: {}", path.display(), reason);
        self.statistics.skipped.push(SkippedFile { path, reason });
    }

    fn record(&mut self, path: &Path, content: &str) {
        let lines = content.lines().count();
        let chars = content.chars().count();

        self.statistics.files_collected += 1;
        self.statistics.total_lines += lines;
        self.statistics.total_chars += chars;
        self.statistics.file_details.push(FileReportInfo {
            path: path.to_string_lossy().to_string(),
            lines,
            chars,
        });
    }
}

impl Iterator for FileCollector {
    type Item = SourceFile;

    fn next(&mut self) -> Option<SourceFile> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().unwrap_or(self.root.as_path()).to_path_buf();
                    let reason = if err.loop_ancestor().is_some() {
                        SkipReason::SymlinkLoop
                    } else {
                        SkipReason::Unreadable(err.to_string())
                    };
                    self.skip(path, reason);
                    continue;
                }
            };

            if !entry.file_type().is_file() || !self.is_supported(entry.path()) {
                continue;
            }

            match read_text(entry.path()) {
                Ok(content) => {
                    let path = self.relative_path(entry.path());
                    self.record(&path, &content);
                    return Some(SourceFile { path, content });
                }
                Err(reason) => self.skip(entry.into_path(), reason),
            }
        }
    }
}

/// Read a file as text, dropping invalid UTF-8 sequences
///
/// Only I/O failures are unrecoverable.
pub fn read_text(path: &Path) -> Result<String, SkipReason> {
    let bytes = fs::read(path).map_err(|e| SkipReason::Unreadable(e.to_string()))?;

    Ok(bytes.utf8_chunks().map(|chunk| chunk.valid()).collect())
}
