//! Configuration for conversion and fetching.
//!
//! Stored as TOML. Every field is optional in the file; missing values fall
//! back to defaults.
//!
//! ```toml
//! [convert]
//! max_reference_depth = 32
//!
//! [fetch]
//! timeout_secs = 30
//! user_agent = "dasc/0.3.0"
//! ```
//!
//! The default location is the platform config directory:
//! - Linux: `~/.config/dasc/global.toml`
//! - macOS: `~/Library/Application Support/dev.dasc.dasc/global.toml`
//! - Windows: `%APPDATA%\dasc\dasc\config\global.toml`

use crate::convert::ConvertOptions;
use crate::reference::DEFAULT_MAX_REFERENCE_DEPTH;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Conversion settings.
    pub convert: ConvertConfig,
    /// HTTP settings.
    pub fetch: FetchConfig,
}

/// Conversion settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Maximum number of nested self-references followed before failing.
    pub max_reference_depth: usize,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            max_reference_depth: DEFAULT_MAX_REFERENCE_DEPTH,
        }
    }
}

/// HTTP settings used when fetching page HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: concat!("dasc/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetchConfig {
    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load from the default location, or defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {e}")))?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config: {e}")))?;
        Ok(())
    }

    /// Path of the global config file.
    pub fn default_path() -> Result<PathBuf> {
        let project_dirs = directories::ProjectDirs::from("dev", "dasc", "dasc")
            .ok_or_else(|| Error::Config("Failed to determine project directories".into()))?;
        Ok(project_dirs.config_dir().join("global.toml"))
    }

    /// Conversion options derived from this config.
    #[must_use]
    pub const fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            max_reference_depth: self.convert.max_reference_depth,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.convert.max_reference_depth == 0 {
            return Err(Error::Config(
                "convert.max_reference_depth must be at least 1".into(),
            ));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(Error::Config("fetch.timeout_secs must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_values() {
        let config = Config::default();

        assert_eq!(config.convert.max_reference_depth, 32);
        assert_eq!(config.fetch.timeout_secs, 30);
        assert!(config.fetch.user_agent.starts_with("dasc/"));
        assert_eq!(config.fetch.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        // Given: A config file that only sets one field
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("global.toml");
        fs::write(&path, "[convert]\nmax_reference_depth = 4\n")?;

        // When: Loading it
        let config = Config::load_from(&path)?;

        // Then: The rest comes from defaults
        assert_eq!(config.convert.max_reference_depth, 4);
        assert_eq!(config.fetch, FetchConfig::default());
        assert_eq!(config.convert_options().max_reference_depth, 4);
        Ok(())
    }

    #[test]
    fn test_save_and_load_roundtrip() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("nested").join("global.toml");
        let original = Config {
            convert: ConvertConfig {
                max_reference_depth: 8,
            },
            fetch: FetchConfig {
                timeout_secs: 5,
                user_agent: "test-agent".to_string(),
            },
        };

        original.save_to(&path)?;
        let loaded = Config::load_from(&path)?;

        assert_eq!(loaded, original);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = Config::load_from(Path::new("/definitely/does/not/exist/global.toml"));

        match result {
            Err(Error::Config(msg)) => assert!(msg.contains("Failed to read config")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("invalid.toml");
        fs::write(&path, "this is not valid toml [[[").unwrap();

        let result = Config::load_from(&path);

        match result {
            Err(Error::Config(msg)) => assert!(msg.contains("Failed to parse config")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("zero.toml");
        fs::write(&path, "[convert]\nmax_reference_depth = 0\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }
}
