//! Core types for comments, findings and scan results.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A comment extracted from source, positioned at its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSpan {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Comment text including its delimiters (`//`, `#`, `/* */`, ...).
    pub text: String,
}

impl CommentSpan {
    /// Creates a new comment span.
    #[must_use]
    pub fn new(line: usize, column: usize, text: impl Into<String>) -> Self {
        Self {
            line,
            column,
            text: text.into(),
        }
    }
}

/// A marker comment found in a file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Finding {
    /// Path as given by the caller, not canonicalized.
    pub file_path: PathBuf,
    /// Line of the comment start (1-indexed, never 0).
    pub line: usize,
    /// Column of the comment start (1-indexed).
    pub column: usize,
    /// Text following the marker. Empty for a bare marker.
    pub message: String,
    /// The full comment as extracted.
    pub comment: String,
}

impl Finding {
    /// Creates a new finding.
    #[must_use]
    pub fn new(
        file_path: impl Into<PathBuf>,
        line: usize,
        column: usize,
        message: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        debug_assert!(line > 0, "line numbers are 1-indexed");
        Self {
            file_path: file_path.into(),
            line,
            column,
            message: message.into(),
            comment: comment.into(),
        }
    }

    /// Formats the finding for terminal output.
    #[must_use]
    pub fn format(&self, marker: &str) -> String {
        if self.message.is_empty() {
            format!("{}:{}: {marker}", self.file_path.display(), self.line)
        } else {
            format!(
                "{}:{}: {marker}: {}",
                self.file_path.display(),
                self.line,
                self.message
            )
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}",
            self.file_path.display(),
            self.line,
            self.column,
            self.message
        )
    }
}

/// A file that could not be scanned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanFailure {
    /// Path that failed.
    pub file_path: PathBuf,
    /// Human-readable reason.
    pub reason: String,
}

impl ScanFailure {
    /// Creates a new failure record.
    #[must_use]
    pub fn new(file_path: &Path, reason: impl Into<String>) -> Self {
        Self {
            file_path: file_path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

/// Result of scanning a set of files.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ScanResult {
    /// All findings, in input file order then line order.
    pub findings: Vec<Finding>,
    /// Number of files successfully scanned.
    pub files_scanned: usize,
    /// Files that could not be read.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<ScanFailure>,
}

impl ScanResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any marker comment was found.
    #[must_use]
    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }

    /// Returns true if any file failed to scan.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Number of distinct files with at least one finding.
    #[must_use]
    pub fn files_with_findings(&self) -> usize {
        let mut files: Vec<&Path> = self.findings.iter().map(|f| f.file_path.as_path()).collect();
        files.dedup();
        files.len()
    }

    /// Adds findings and failures from another result.
    pub fn extend(&mut self, other: Self) {
        self.findings.extend(other.findings);
        self.files_scanned += other.files_scanned;
        self.failures.extend(other.failures);
    }
}
