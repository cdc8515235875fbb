//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"# bark configuration
# Comments starting with the marker tag are reported by `bark scan`.

# Tag to look for. Must be non-empty, without whitespace, and must not
# start with comment punctuation.
marker = "BARK"

[scan]
root = "."
exclude = ["**/.git/**", "**/target/**", "**/node_modules/**", "**/vendor/**"]

# Skip files listed in .gitignore / .ignore
respect_gitignore = true

# Scan dotfiles such as .env and .bashrc
include_hidden = true

# Worker threads (default: number of CPUs)
# parallelism = 4
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_template(Path::new("bark.toml"), force)?;

    println!("Created bark.toml");
    println!();
    println!("Next steps:");
    println!("  1. Adjust marker and [scan] exclude for your project");
    println!("  2. Run: bark scan");

    Ok(())
}

fn write_template(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, CONFIG_TEMPLATE)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bark_core::Config;
    use tempfile::TempDir;

    #[test]
    fn template_parses_to_defaults() {
        let config = Config::parse(CONFIG_TEMPLATE).unwrap();
        config.validate().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bark.toml");
        std::fs::write(&path, "marker = \"HACK\"\n").unwrap();

        let err = write_template(&path, false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "marker = \"HACK\"\n");

        write_template(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);
    }
}
