use std::path::PathBuf;
use thiserror::Error;

/// Wharfmap error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    ConfigValidation(String),

    #[error("Unsupported output format for {}: must be a Graphviz output format", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Container runtime error: {0}")]
    Runtime(#[from] bollard::errors::Error),

    #[error("Layout engine error: {0}")]
    Layout(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Wharfmap operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a config validation error
    pub fn config_validation(msg: impl Into<String>) -> Self {
        Error::ConfigValidation(msg.into())
    }

    /// Create an unsupported-format error
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Error::UnsupportedFormat { path: path.into() }
    }

    /// Create a layout engine error
    pub fn layout(msg: impl Into<String>) -> Self {
        Error::Layout(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}
