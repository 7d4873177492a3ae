//! ---
//! ffl_section: "01-core-functionality"
//! ffl_subsection: "module"
//! ffl_type: "source"
//! ffl_scope: "code"
//! ffl_description: "Shared configuration and logging for FFL clients."
//! ffl_version: "v0.0.0-prealpha"
//! ffl_owner: "tbd"
//! ---
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use ffl_msg::MessageCatalog;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::logging::LogFormat;

fn default_log_level() -> String {
    "info".to_owned()
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

/// Identity and logging settings for a service bus client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub user_name: String,
    /// Queue the remote services answer on. Empty means no replies.
    #[serde(default)]
    pub reply_to: Option<String>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Metadata describing where a [`ClientConfig`] was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedClientConfig {
    pub config: ClientConfig,
    pub source: PathBuf,
}

impl ClientConfig {
    pub const ENV_CONFIG_PATH: &str = "FFL_CONFIG";

    /// Configuration without a file, typically assembled from CLI flags.
    pub fn new(user_name: impl Into<String>, reply_to: Option<String>) -> Self {
        Self {
            user_name: user_name.into(),
            reply_to,
            logging: LoggingConfig::default(),
        }
    }

    /// Load configuration from disk, respecting the `FFL_CONFIG` override.
    pub fn load<P: AsRef<Path>>(candidates: &[P]) -> Result<Self> {
        Ok(Self::load_with_source(candidates)?.config)
    }

    /// Load configuration from disk together with the effective source path.
    pub fn load_with_source<P: AsRef<Path>>(candidates: &[P]) -> Result<LoadedClientConfig> {
        let env_path = std::env::var(Self::ENV_CONFIG_PATH).ok();
        Self::resolve(env_path.as_deref(), candidates)
    }

    /// Resolve `override_path` first, then the first existing candidate.
    fn resolve<P: AsRef<Path>>(
        override_path: Option<&str>,
        candidates: &[P],
    ) -> Result<LoadedClientConfig> {
        if let Some(override_path) = override_path {
            if !override_path.trim().is_empty() {
                let path = PathBuf::from(override_path);
                let config = Self::from_path(&path)?;
                return Ok(LoadedClientConfig {
                    config,
                    source: path,
                });
            }
        }

        for candidate in candidates {
            if candidate.as_ref().exists() {
                let path = candidate.as_ref().to_path_buf();
                let config = Self::from_path(&path)?;
                return Ok(LoadedClientConfig {
                    config,
                    source: path,
                });
            }
        }

        Err(anyhow!(
            "no configuration files found. inspected: {}",
            candidates
                .iter()
                .map(|p| p.as_ref().display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    }

    /// Read and validate a single configuration file.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(config_path = %path.display(), "loading configuration");
        let contents = fs::read_to_string(path)
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        let config = toml::from_str::<ClientConfig>(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate structural invariants of the logging section.
    ///
    /// Identity values are passed to the catalog untouched.
    pub fn validate(&self) -> Result<()> {
        self.logging.validate()
    }

    /// Build a request catalog for the configured identity.
    pub fn catalog(&self) -> MessageCatalog {
        MessageCatalog::new(self.user_name.clone(), self.reply_to.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when neither `FFL_LOG` nor `RUST_LOG` is set.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
    /// Enables a daily rolling JSON log file in this directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
    #[serde(default)]
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    fn validate(&self) -> Result<()> {
        if self.level.trim().is_empty() {
            return Err(anyhow!("logging.level must not be empty"));
        }
        if let Some(prefix) = &self.file_prefix {
            if prefix.trim().is_empty() {
                return Err(anyhow!("logging.file_prefix must not be blank when set"));
            }
            if self.directory.is_none() {
                return Err(anyhow!("logging.file_prefix requires logging.directory"));
            }
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            directory: None,
            file_prefix: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn parses_full_configuration() {
        let file = write_config(
            r#"
user_name = "alice"
reply_to = "alice.replies"

[logging]
level = "debug"
format = "structured-json"
directory = "target/logs"
file_prefix = "fflctl"
"#,
        );
        let config = ClientConfig::from_path(file.path()).expect("load config");
        assert_eq!(config.user_name, "alice");
        assert_eq!(config.reply_to.as_deref(), Some("alice.replies"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::StructuredJson);
        assert_eq!(config.logging.directory, Some(PathBuf::from("target/logs")));
    }

    #[test]
    fn logging_section_defaults_when_missing() {
        let file = write_config("user_name = \"alice\"\n");
        let config = ClientConfig::from_path(file.path()).expect("load config");
        assert!(config.reply_to.is_none());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.logging.directory.is_none());
    }

    #[test]
    fn missing_user_name_is_a_parse_error() {
        let file = write_config("reply_to = \"q\"\n");
        let err = ClientConfig::from_path(file.path()).expect_err("user_name is required");
        assert!(err.to_string().contains("failed to parse config file"));
    }

    #[test]
    fn file_prefix_without_directory_is_rejected() {
        let file = write_config(
            r#"
user_name = "alice"
[logging]
file_prefix = "fflctl"
"#,
        );
        assert!(ClientConfig::from_path(file.path()).is_err());
    }

    #[test]
    fn load_picks_first_existing_candidate() {
        let file = write_config("user_name = \"bob\"\n");
        let missing = PathBuf::from("does/not/exist.toml");
        let loaded = ClientConfig::resolve(None, &[missing, file.path().to_path_buf()])
            .expect("load config");
        assert_eq!(loaded.source, file.path());
        assert_eq!(loaded.config.user_name, "bob");
    }

    #[test]
    fn load_reports_inspected_paths() {
        let err = ClientConfig::resolve(None, &["nowhere/a.toml", "nowhere/b.toml"])
            .expect_err("no candidates exist");
        let message = err.to_string();
        assert!(message.contains("nowhere/a.toml"));
        assert!(message.contains("nowhere/b.toml"));
    }

    #[test]
    fn override_path_beats_candidates() {
        let candidate = write_config("user_name = \"candidate\"\n");
        let override_file = write_config("user_name = \"override\"\n");
        let override_path = override_file.path().to_str().expect("utf-8 temp path");
        let loaded = ClientConfig::resolve(Some(override_path), &[candidate.path()])
            .expect("load config");
        assert_eq!(loaded.config.user_name, "override");
        assert_eq!(loaded.source, override_file.path());
    }

    #[test]
    fn blank_override_path_is_ignored() {
        let candidate = write_config("user_name = \"candidate\"\n");
        let loaded = ClientConfig::resolve(Some("  "), &[candidate.path()]).expect("load config");
        assert_eq!(loaded.config.user_name, "candidate");
    }

    #[test]
    fn catalog_uses_configured_identity() {
        let config = ClientConfig::new("alice", Some(String::new()));
        let catalog = config.catalog();
        assert_eq!(catalog.user_name(), "alice");
        assert!(catalog.reply_to().is_none());
        assert_eq!(catalog.task_listing().correlation_id(), 1);
    }
}
