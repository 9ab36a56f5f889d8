//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_data::CatalogClient;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in order, from the working directory upwards.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Memoizing catalog client shared by every read in this run.
    pub catalog: CatalogClient,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            find_config(&cwd)?.unwrap_or_default()
        };

        let catalog = CatalogClient::new(&config.api.base_url)
            .with_context(|| format!("Invalid api.base_url: {}", config.api.base_url))?;

        Ok(Self {
            config,
            output,
            cwd,
            catalog,
        })
    }
}

/// Path of the nearest config file at or above `start`.
pub fn find_config_path(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load the nearest config file, if there is one.
///
/// A file that exists but does not parse is an error, as with `--config`.
fn find_config(start: &Path) -> Result<Option<CliConfig>> {
    let Some(path) = find_config_path(start) else {
        return Ok(None);
    };
    CliConfig::load(&path.to_string_lossy()).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            dir.path().join("storefront.toml"),
            "[api]\nbase_url = \"http://localhost:8080\"\n",
        )
        .unwrap();

        let found = find_config_path(&nested).unwrap();
        assert_eq!(found, dir.path().join("storefront.toml"));

        let config = find_config(&nested).unwrap().unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_nearest_config_wins() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("shop");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("storefront.toml"), "[log]\nlevel = \"info\"\n").unwrap();
        std::fs::write(nested.join(".storefront.toml"), "[log]\nlevel = \"debug\"\n").unwrap();

        let config = find_config(&nested).unwrap().unwrap();
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("storefront.toml"),
            "[api]\nbase_url = http://oops\n",
        )
        .unwrap();

        let err = find_config(dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML config"));
    }
}
