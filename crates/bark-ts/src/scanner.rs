//! File scanning: resolve, extract, match.
//!
//! [`FileScanner`] ties the [`Registry`], the comment extractor and a
//! [`Marker`] together. Only I/O failures are errors; unsupported files and
//! unparsable content simply produce no findings.

use bark_core::{Finding, Marker, ScanFailure, ScanResult};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::extractor;
use crate::registry::Registry;

/// Errors that can occur while scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    /// File could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Worker pool could not be started.
    #[error("failed to start scan workers: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Scans files for marker comments.
pub struct FileScanner {
    registry: Registry,
    marker: Marker,
}

impl FileScanner {
    /// Creates a scanner over all built-in languages.
    #[must_use]
    pub fn new(marker: Marker) -> Self {
        Self::with_registry(Registry::new(), marker)
    }

    /// Creates a scanner with a custom registry.
    #[must_use]
    pub fn with_registry(registry: Registry, marker: Marker) -> Self {
        Self { registry, marker }
    }

    /// The language registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The marker being searched for.
    #[must_use]
    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    /// Scans a single file.
    ///
    /// Unsupported files return no findings without being read.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Io`] if the file cannot be read.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<Finding>, ScanError> {
        Ok(self.scan_one(path)?.unwrap_or_default())
    }

    /// Scans in-memory content as if it were the file at `path`.
    #[must_use]
    pub fn parse_source(&self, path: &Path, source: &[u8]) -> Vec<Finding> {
        let Some(language) = self.registry.resolve(path) else {
            return Vec::new();
        };
        let spans = extractor::extract(language, source);
        self.marker.scan(path, &spans)
    }

    /// Scans many files on a bounded worker pool.
    ///
    /// `parallelism` caps the number of worker threads (`None` uses one per
    /// CPU). Findings are returned in input order regardless of which worker
    /// finishes first. A file that cannot be read is recorded in
    /// [`ScanResult::failures`] and does not stop the others.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::ThreadPool`] if the worker pool cannot be built.
    pub fn scan_files(
        &self,
        files: &[PathBuf],
        parallelism: Option<usize>,
    ) -> Result<ScanResult, ScanError> {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(n) = parallelism {
            builder = builder.num_threads(n);
        }
        let pool = builder.build()?;

        info!(
            "Scanning {} files for {} on {} threads",
            files.len(),
            self.marker.tag(),
            pool.current_num_threads()
        );

        let outcomes: Vec<_> = pool.install(|| {
            files
                .par_iter()
                .map(|path| (path, self.scan_one(path)))
                .collect()
        });

        let mut result = ScanResult::new();
        for (path, outcome) in outcomes {
            match outcome {
                Ok(Some(findings)) => {
                    result.findings.extend(findings);
                    result.files_scanned += 1;
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("{e}");
                    result.failures.push(ScanFailure::new(path, e.to_string()));
                }
            }
        }

        info!(
            "Scan complete: {} findings in {} files",
            result.findings.len(),
            result.files_scanned
        );

        Ok(result)
    }

    /// `None` when the file type is unsupported.
    fn scan_one(&self, path: &Path) -> Result<Option<Vec<Finding>>, ScanError> {
        let Some(language) = self.registry.resolve(path) else {
            debug!("Skipping unsupported file: {}", path.display());
            return Ok(None);
        };

        debug!("Scanning {} as {}", path.display(), language.name());

        let source = std::fs::read(path).map_err(|e| ScanError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let spans = extractor::extract(language, &source);
        Ok(Some(self.marker.scan(path, &spans)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn scanner() -> FileScanner {
        FileScanner::new(Marker::new("BARK").unwrap())
    }

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn parse_source_colon_form() {
        let findings = scanner().parse_source(Path::new("a.go"), b"// BARK: Remove this\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "Remove this");
        assert_eq!(findings[0].line, 1);
    }

    #[test]
    fn parse_source_ignores_marker_in_strings() {
        let src = b"package main\nvar s = \"// BARK: not me\"\n";
        assert!(scanner().parse_source(Path::new("a.go"), src).is_empty());
    }

    #[test]
    fn parse_file_unsupported_is_empty_not_error() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "test.txt", "BARK: This should not be found");
        let findings = scanner().parse_file(&path).unwrap();
        assert!(findings.is_empty());
    }

    #[test]
    fn parse_file_unsupported_missing_is_not_error() {
        let findings = scanner()
            .parse_file(Path::new("/nonexistent/notes.txt"))
            .unwrap();
        assert!(findings.is_empty());
    }

    #[test]
    fn parse_file_missing_supported_is_io_error() {
        let err = scanner()
            .parse_file(Path::new("/nonexistent/main.go"))
            .unwrap_err();
        assert!(matches!(err, ScanError::Io { .. }));
        assert!(err.to_string().contains("main.go"));
    }

    #[test]
    fn scan_files_preserves_input_order() {
        let tmp = TempDir::new().unwrap();
        let files: Vec<PathBuf> = (0..16)
            .map(|i| write(&tmp, &format!("f{i:02}.py"), &format!("x = 1\n# BARK: file {i}\n")))
            .collect();

        let result = scanner().scan_files(&files, Some(4)).unwrap();

        assert_eq!(result.files_scanned, 16);
        let messages: Vec<String> = result.findings.iter().map(|f| f.message.clone()).collect();
        let expected: Vec<String> = (0..16).map(|i| format!("file {i}")).collect();
        assert_eq!(messages, expected);
    }

    #[test]
    fn scan_files_records_failures_and_continues() {
        let tmp = TempDir::new().unwrap();
        let good = write(&tmp, "good.go", "// BARK: here\npackage main\n");
        let missing = tmp.path().join("missing.go");
        let unsupported = write(&tmp, "notes.txt", "// BARK: no");

        let result = scanner()
            .scan_files(&[missing.clone(), good.clone(), unsupported], None)
            .unwrap();

        assert_eq!(result.files_scanned, 1);
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].file_path, good);
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].file_path, missing);
    }
}
