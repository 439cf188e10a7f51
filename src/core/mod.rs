//! Core system types and foundations
//!
//! Error handling, driver configuration and logging setup.

pub mod error;
pub mod config;
pub mod logging;

// Re-export commonly used items
pub use error::{Error, Result};
pub use config::{Config, DocumentKind};
