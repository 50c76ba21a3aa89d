//! Configuration types and loading.
//!
//! The main entry point is [`SgcConfig`]. It is assembled with [`load_config`]
//! (discovering the file) or [`load_config_from`] (explicit file), and written
//! with [`save_config`].

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config_file::find_config_file;

/// Prefix of environment variables that override file settings.
const ENV_PREFIX: &str = "SGC_";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be written.
    #[error("failed to write config file: {0}")]
    WriteError(#[from] std::io::Error),

    /// A provider (file or environment) held an unparseable value.
    #[error("failed to load configuration: {0}")]
    ParseError(#[from] Box<figment::Error>),

    /// The configuration could not be serialized to YAML.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] serde_yaml::Error),

    /// A configuration value was invalid.
    #[error("invalid configuration value for key '{key}': {reason}")]
    InvalidValue {
        /// The configuration key that had an invalid value.
        key: String,
        /// A description of why the value is invalid.
        reason: String,
    },
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Config struct
// ---------------------------------------------------------------------------

/// Effective settings for one run.
///
/// All fields use `serde` defaults so a partially specified file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SgcConfig {
    /// Remote that branches are created from and pushed to.
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Git executable to run.
    #[serde(default = "default_git_binary", rename = "git-binary")]
    pub git_binary: String,

    /// `LC_ALL` value forced while parsing `git remote show`.
    #[serde(default = "default_remote_locale", rename = "remote-locale")]
    pub remote_locale: String,

    /// Emit JSON instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

impl Default for SgcConfig {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            git_binary: default_git_binary(),
            remote_locale: default_remote_locale(),
            json: false,
        }
    }
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_git_binary() -> String {
    "git".to_string()
}

fn default_remote_locale() -> String {
    "C".to_string()
}

impl SgcConfig {
    /// Reject values that would make every git call fail in confusing ways.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("remote", &self.remote),
            ("git-binary", &self.git_binary),
            ("remote-locale", &self.remote_locale),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Load configuration for a run started in `start`.
///
/// Uses the file found by [`find_config_file`], if any.
///
/// # Errors
///
/// Returns [`ConfigError::ParseError`] if the file or an `SGC_*` variable holds
/// an invalid value, or [`ConfigError::InvalidValue`] if validation fails.
pub fn load_config(start: &Path) -> Result<SgcConfig> {
    let file = find_config_file(start);
    load_config_from(file.as_deref())
}

/// Load configuration from defaults, then `file` (when given), then the
/// environment.
///
/// A file that does not exist contributes nothing.
pub fn load_config_from(file: Option<&Path>) -> Result<SgcConfig> {
    let mut figment = Figment::from(Serialized::defaults(SgcConfig::default()));
    if let Some(path) = file {
        figment = figment.merge(Yaml::file(path));
    }
    figment = figment.merge(
        Env::prefixed(ENV_PREFIX)
            .ignore(&["config"])
            .map(|key| key.as_str().to_ascii_lowercase().replace('_', "-").into()),
    );

    let config: SgcConfig = figment.extract().map_err(Box::new)?;
    config.validate()?;
    Ok(config)
}

/// Write `config` as YAML to `path`, creating parent directories.
pub fn save_config(path: &Path, config: &SgcConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let cfg = SgcConfig::default();
        assert_eq!(cfg.remote, "origin");
        assert_eq!(cfg.git_binary, "git");
        assert_eq!(cfg.remote_locale, "C");
        assert!(!cfg.json);
    }

    #[test]
    fn test_missing_file_returns_default() {
        Jail::expect_with(|_jail| {
            let path = PathBuf::from("/nonexistent/path/.sgc.yaml");
            let cfg = load_config_from(Some(&path)).map_err(|e| e.to_string())?;
            assert_eq!(cfg, SgcConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(".sgc.yaml", "remote: upstream\nremote-locale: en_US.UTF-8\n")?;
            let cfg = load_config(jail.directory()).map_err(|e| e.to_string())?;
            assert_eq!(cfg.remote, "upstream");
            assert_eq!(cfg.remote_locale, "en_US.UTF-8");
            assert_eq!(cfg.git_binary, "git");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(".sgc.yaml", "remote: upstream\n")?;
            jail.set_env("SGC_REMOTE", "fork");
            jail.set_env("SGC_GIT_BINARY", "/opt/git/bin/git");
            jail.set_env("SGC_JSON", "true");
            let cfg = load_config(jail.directory()).map_err(|e| e.to_string())?;
            assert_eq!(cfg.remote, "fork");
            assert_eq!(cfg.git_binary, "/opt/git/bin/git");
            assert!(cfg.json);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        Jail::expect_with(|jail| {
            jail.create_file(".sgc.yaml", "remote: [unterminated\n")?;
            let err = load_config(jail.directory()).unwrap_err();
            assert!(matches!(err, ConfigError::ParseError(_)), "got: {err:?}");
            Ok(())
        });
    }

    #[test]
    fn test_empty_remote_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file(".sgc.yaml", "remote: \"\"\n")?;
            let err = load_config(jail.directory()).unwrap_err();
            assert!(
                matches!(&err, ConfigError::InvalidValue { key, .. } if key == "remote"),
                "got: {err:?}"
            );
            Ok(())
        });
    }

    #[test]
    fn test_save_then_load() {
        Jail::expect_with(|jail| {
            let path = jail.directory().join("nested").join(".sgc.yaml");
            let cfg = SgcConfig {
                remote: "upstream".to_string(),
                ..SgcConfig::default()
            };
            save_config(&path, &cfg).map_err(|e| e.to_string())?;
            let loaded = load_config_from(Some(&path)).map_err(|e| e.to_string())?;
            assert_eq!(loaded, cfg);
            Ok(())
        });
    }
}
