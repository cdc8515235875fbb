//! Scan command implementation.

use anyhow::{Context, Result};
use bark_core::ScanConfig;
use bark_ts::{FileScanner, Registry};
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Command-line options for `bark scan`.
pub struct ScanOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Marker tag overriding the config.
    pub marker: Option<String>,
    /// Extra exclude globs.
    pub exclude: Vec<String>,
    /// Exit with status 1 when anything is found.
    pub fail_on_findings: bool,
}

/// Runs the scan command.
pub fn run(path: &Path, options: &ScanOptions, source: &ConfigSource) -> Result<()> {
    let mut config = source.load()?;

    if let Some(marker) = &options.marker {
        config.marker.clone_from(marker);
    }
    config.scan.exclude.extend(options.exclude.iter().cloned());
    config.validate().context("Invalid scan options")?;

    let scanner = FileScanner::new(config.marker()?);

    let root = scan_root(path, &config.scan.root);
    let files = discover_files(&root, &config.scan, scanner.registry())?;

    let result = scanner
        .scan_files(&files, config.scan.parallelism)
        .context("Scan failed")?;

    super::output::print(&result, scanner.marker().tag(), options.format)?;

    if options.fail_on_findings && result.has_findings() {
        std::process::exit(1);
    }

    Ok(())
}

/// Directory (or single file) to walk.
fn scan_root(path: &Path, configured: &Path) -> PathBuf {
    if configured.is_absolute() {
        configured.to_path_buf()
    } else if path.is_file() || configured == Path::new(".") {
        path.to_path_buf()
    } else {
        path.join(configured)
    }
}

/// Walks `root` and returns every file a registered language claims.
fn discover_files(root: &Path, scan: &ScanConfig, registry: &Registry) -> Result<Vec<PathBuf>> {
    let excludes = scan
        .exclude
        .iter()
        .map(|p| glob::Pattern::new(p).with_context(|| format!("Invalid exclude pattern: {p}")))
        .collect::<Result<Vec<_>>>()?;

    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .hidden(!scan.include_hidden)
        .git_ignore(scan.respect_gitignore)
        .git_global(scan.respect_gitignore)
        .git_exclude(scan.respect_gitignore)
        .ignore(scan.respect_gitignore)
        .parents(scan.respect_gitignore);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        if !registry.is_supported(path) {
            continue;
        }

        let rel = path.strip_prefix(root).unwrap_or(path);
        if excludes
            .iter()
            .any(|p| p.matches_path(rel) || p.matches_path(path))
        {
            tracing::debug!("Excluding: {}", path.display());
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    tracing::debug!("Discovered {} supported files under {}", files.len(), root.display());
    Ok(files)
}
