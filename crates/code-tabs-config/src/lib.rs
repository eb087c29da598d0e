//! Configuration management for code tabs extraction.
//!
//! Parses `code-tabs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ```toml
//! [markup]
//! host_tag = "code-tabs"
//! pane_tag = "code-pane"
//! line_numbers_attr = "linenums"
//! ```
//!
//! Every field is optional; omitted fields keep the names above.

use std::path::{Path, PathBuf};

use code_tabs::{HOST_TAG, LINE_NUMBERS_ATTR, MarkupNames, PANE_TAG, TabExtractor};
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "code-tabs.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Marker names used in documentation markup.
    pub markup: MarkupConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Marker names configuration.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MarkupConfig {
    /// Tag of the element hosting a tab group.
    pub host_tag: String,
    /// Tag of each code sample.
    pub pane_tag: String,
    /// Attribute carrying the line-numbering directive.
    pub line_numbers_attr: String,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            host_tag: HOST_TAG.to_owned(),
            pane_tag: PANE_TAG.to_owned(),
            line_numbers_attr: LINE_NUMBERS_ATTR.to_owned(),
        }
    }
}

impl MarkupConfig {
    /// Validate marker names.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a name is empty or contains
    /// characters outside ASCII alphanumerics, `-`, `_` and `:`, or if the
    /// host and pane tags are the same.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_name(&self.host_tag, "markup.host_tag")?;
        require_name(&self.pane_tag, "markup.pane_tag")?;
        require_name(&self.line_numbers_attr, "markup.line_numbers_attr")?;
        if self.host_tag.eq_ignore_ascii_case(&self.pane_tag) {
            return Err(ConfigError::Validation(format!(
                "markup.host_tag and markup.pane_tag must differ (both are \"{}\")",
                self.host_tag
            )));
        }
        Ok(())
    }

    /// Convert into the names used by the extractor.
    #[must_use]
    pub fn to_names(&self) -> MarkupNames {
        MarkupNames {
            host_tag: self.host_tag.clone(),
            pane_tag: self.pane_tag.clone(),
            line_numbers_attr: self.line_numbers_attr.clone(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

fn require_name(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    if let Some(c) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':')))
    {
        return Err(ConfigError::Validation(format!(
            "{field} contains invalid character {c:?}: \"{value}\""
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that path. Otherwise searches
    /// for `code-tabs.toml` in the current directory and its parents, and
    /// falls back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        let discovered = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd));
        match discovered {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Extractor configured with this config's marker names.
    #[must_use]
    pub fn extractor(&self) -> TabExtractor {
        TabExtractor::with_names(self.markup.to_names())
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.markup.validate()
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;
        Ok(config)
    }
}
