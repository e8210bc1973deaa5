//! Error types for NIMBUS.

use std::io;

/// Errors produced by the NIMBUS framework.
#[derive(Debug, thiserror::Error)]
pub enum NimbusError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("header error: {0}")]
    Header(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, NimbusError>;
