//! Locating and loading `bark.toml`.
//!
//! Lookup order:
//!
//! 1. `--config <path>`
//! 2. `bark.toml`, then `.bark.toml`, in the scanned directory
//! 3. `config.toml` in `$BARK_CONFIG_DIR` or `~/.bark/`
//! 4. built-in defaults

use anyhow::{Context, Result};
use bark_core::Config;
use std::path::{Path, PathBuf};

/// Where the configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`.
    Explicit(PathBuf),
    /// Found next to the scanned files.
    Project(PathBuf),
    /// Found in the user's global config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Path of the config file, `None` for defaults.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Reads and validates the config this source points at.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            tracing::debug!("No bark.toml found, using defaults");
            return Ok(Config::default());
        };

        if matches!(self, Self::Global(_)) {
            tracing::info!("Using global config: {}", path.display());
        }

        let config = Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }
}

const PROJECT_CONFIG_NAMES: &[&str] = &["bark.toml", ".bark.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves which config file applies to a scan of `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_in(project_dir, explicit, global_config_dir())
}

fn resolve_in(project_dir: &Path, explicit: Option<&Path>, global_dir: Option<PathBuf>) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    // Scanning a single file: look for config beside it.
    let dir = if project_dir.is_file() {
        project_dir.parent().unwrap_or(project_dir)
    } else {
        project_dir
    };

    if let Some(found) = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
    {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    match global_dir.map(|d| d.join(GLOBAL_CONFIG_NAME)) {
        Some(candidate) if candidate.is_file() => {
            tracing::debug!("Found global config: {}", candidate.display());
            ConfigSource::Global(candidate)
        }
        _ => ConfigSource::Default,
    }
}

/// `$BARK_CONFIG_DIR`, else `~/.bark/`.
fn global_config_dir() -> Option<PathBuf> {
    std::env::var_os("BARK_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".bark")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_wins_and_is_not_checked() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("bark.toml"), "").unwrap();

        let result = resolve_in(tmp.path(), Some(Path::new("/nonexistent.toml")), None);
        assert_eq!(
            result,
            ConfigSource::Explicit(PathBuf::from("/nonexistent.toml"))
        );
    }

    #[test]
    fn bark_toml_preferred_over_dot_prefix() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("bark.toml"), "").unwrap();
        fs::write(tmp.path().join(".bark.toml"), "").unwrap();

        let result = resolve_in(tmp.path(), None, None);
        assert_eq!(result, ConfigSource::Project(tmp.path().join("bark.toml")));
    }

    #[test]
    fn dot_bark_toml_found() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".bark.toml"), "").unwrap();

        let result = resolve_in(tmp.path(), None, None);
        assert_eq!(result, ConfigSource::Project(tmp.path().join(".bark.toml")));
    }

    #[test]
    fn single_file_uses_parent_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("bark.toml"), "").unwrap();
        let file = tmp.path().join("main.go");
        fs::write(&file, "package main\n").unwrap();

        let result = resolve_in(&file, None, None);
        assert_eq!(result, ConfigSource::Project(tmp.path().join("bark.toml")));
    }

    #[test]
    fn global_fallback() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), "").unwrap();

        let result = resolve_in(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(
            result,
            ConfigSource::Global(global.path().join("config.toml"))
        );
    }

    #[test]
    fn nothing_found_is_default() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();

        let result = resolve_in(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(result, ConfigSource::Default);
        assert!(result.path().is_none());
    }

    #[test]
    fn load_default_config() {
        let config = ConfigSource::Default.load().unwrap();
        assert_eq!(config.marker, "BARK");
    }

    #[test]
    fn load_rejects_invalid_marker() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bark.toml");
        fs::write(&path, "marker = \"\"\n").unwrap();

        let err = ConfigSource::Project(path).load().unwrap_err();
        assert!(format!("{err:#}").contains("marker tag must not be empty"));
    }

    #[test]
    fn load_reads_marker() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bark.toml");
        fs::write(&path, "marker = \"HACK\"\n").unwrap();

        let config = ConfigSource::Explicit(path).load().unwrap();
        assert_eq!(config.marker, "HACK");
    }
}
