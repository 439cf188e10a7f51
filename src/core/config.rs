//! Configuration for the list-visitor driver
//!
//! Only the binary is configurable: which kind of document to build, the
//! lines to put in it, and how to log. Document decorations are constants
//! of each kind and are not configurable.
//!
//! Sources, lowest precedence first: defaults, `list-visitor.toml` (or the
//! file given on the command line), `LV_*` environment variables, CLI flags.

use crate::core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Default configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "list-visitor.toml";

/// Line appended when none are given
pub const DEFAULT_LINE: &str = "This is line";

/// Document kinds the driver can build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Build a `BulletList`
    Bullet,
    /// Build an `HtmlList`
    Html,
}

impl FromStr for DocumentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bullet" => Ok(DocumentKind::Bullet),
            "html" => Ok(DocumentKind::Html),
            _ => Err(Error::invalid_input(format!(
                "Invalid document kind: {}. Valid options: bullet, html",
                s
            ))),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Bullet => f.write_str("bullet"),
            DocumentKind::Html => f.write_str("html"),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Document built by the driver
    #[serde(default)]
    pub driver: DriverConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_level")]
    pub level: String,

    /// Log format (pretty, compact)
    #[serde(default = "default_format")]
    pub format: String,
}

/// Driver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Kind of document to build
    #[serde(default = "default_kind")]
    pub kind: DocumentKind,

    /// Lines appended in order
    #[serde(default = "default_lines")]
    pub lines: Vec<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            lines: default_lines(),
        }
    }
}

// Default value functions for serde
fn default_level() -> String { "warn".to_string() }
fn default_format() -> String { "pretty".to_string() }
fn default_kind() -> DocumentKind { DocumentKind::Html }
fn default_lines() -> Vec<String> { vec![DEFAULT_LINE.to_string()] }

impl Config {
    /// Load configuration from the default file, if present, and the environment.
    ///
    /// The result is not validated, so that later overrides can still
    /// replace a bad value. Call [`Config::validate`] once every source
    /// has been applied.
    pub fn load() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        let config = if path.exists() {
            Self::from_file(path)?
        } else {
            Config::default()
        };
        config.finish()
    }

    /// Load configuration from `path` and the environment, unvalidated
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file(path)?.finish()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config file {:?}: {}", path, e)))?;

        toml::from_str(&contents)
            .map_err(|e| Error::config(format!("Failed to parse config file {:?}: {}", path, e)))
    }

    fn finish(mut self) -> Result<Self> {
        self.apply_env_overrides()?;
        Ok(self)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(level) = var("LV_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Some(format) = var("LV_LOG_FORMAT") {
            self.logging.format = format;
        }

        if let Some(kind) = var("LV_KIND") {
            self.driver.kind = kind
                .parse()
                .map_err(|e| Error::config(format!("LV_KIND: {}", e)))?;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(Error::config(format!("Invalid log level: {}", other))),
        }

        match self.logging.format.as_str() {
            "pretty" | "compact" => {}
            other => return Err(Error::config(format!("Invalid log format: {}", other))),
        }

        Ok(())
    }
}
