//! Configuration types for bark.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::marker::{Marker, MarkerError};

/// Marker tag used when none is configured.
pub const DEFAULT_MARKER: &str = "BARK";

/// Top-level configuration, read from `bark.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Marker tag to look for in comments.
    #[serde(default = "default_marker")]
    pub marker: String,

    /// File discovery and scanning settings.
    #[serde(default)]
    pub scan: ScanConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            scan: ScanConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Builds the configured [`Marker`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured tag is not a valid marker.
    pub fn marker(&self) -> Result<Marker, ConfigError> {
        Ok(Marker::new(self.marker.clone())?)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.marker()?;

        if self.scan.parallelism == Some(0) {
            return Err(ConfigError::Validation(
                "scan.parallelism must be at least 1".into(),
            ));
        }

        if let Some(bad) = self
            .scan
            .exclude
            .iter()
            .find(|p| glob::Pattern::new(p).is_err())
        {
            return Err(ConfigError::Validation(format!(
                "scan.exclude: invalid glob pattern '{bad}'"
            )));
        }

        Ok(())
    }
}

/// File discovery and scanning configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Root directory to scan (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from scanning.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Whether to respect `.gitignore` files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,

    /// Whether to scan hidden files such as `.env`.
    #[serde(default = "default_true")]
    pub include_hidden: bool,

    /// Maximum number of files scanned in parallel.
    #[serde(default)]
    pub parallelism: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: default_exclude(),
            respect_gitignore: true,
            include_hidden: true,
            parallelism: None,
        }
    }
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_exclude() -> Vec<String> {
    vec![
        "**/.git/**".to_string(),
        "**/target/**".to_string(),
        "**/node_modules/**".to_string(),
        "**/vendor/**".to_string(),
    ]
}

fn default_true() -> bool {
    true
}

/// Configuration errors.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    #[diagnostic(code(bark::config::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    #[diagnostic(code(bark::config::parse), help("see `bark init` for a template"))]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Configured marker tag is invalid.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Marker(#[from] MarkerError),

    /// Config is structurally invalid.
    #[error("config validation: {0}")]
    #[diagnostic(code(bark::config::invalid))]
    Validation(String),
}
