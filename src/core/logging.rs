//! Logging setup
//!
//! The library only emits `tracing` events. The binary installs a `fmt`
//! subscriber that writes to stderr, leaving stdout to rendered documents.
//! The level comes from [`LoggingConfig::level`] alone; `RUST_LOG` is not
//! consulted, so the config file, `LV_LOG_LEVEL` and `--log-level` decide.

use crate::core::config::LoggingConfig;
use crate::core::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Build the level filter for `config`.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.level)
        .map_err(|e| Error::config(format!("Invalid log filter: {}", e)))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.format.as_str() {
        "compact" => builder.compact().try_init(),
        _ => builder.pretty().try_init(),
    };

    installed.map_err(|e| Error::config(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_env_filter_from_level() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: "compact".to_string(),
        };
        let filter = env_filter(&config).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_env_filter_ignores_rust_log() {
        std::env::set_var("RUST_LOG", "trace");
        let config = LoggingConfig {
            level: "error".to_string(),
            format: "pretty".to_string(),
        };
        let filter = env_filter(&config).unwrap();
        std::env::remove_var("RUST_LOG");

        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_second_init_fails() {
        let config = LoggingConfig::default();
        // Another test may already have installed a subscriber.
        let _ = init(&config);
        assert!(matches!(init(&config), Err(Error::Config(_))));
    }
}
