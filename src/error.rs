use std::path::PathBuf;
use thiserror::Error;

use crate::cos::ObjectRef;

/// Core library errors
#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Icon error: {0}")]
    Icon(#[from] IconError),

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors loading a document
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read document '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid hex string: {0}")]
    InvalidHex(String),

    #[error("Object {0} is defined more than once")]
    DuplicateObject(ObjectRef),
}

/// Icon table errors
#[derive(Error, Debug)]
pub enum IconError {
    #[error("Icon base path is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ExplorerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ConfigError::Invalid("max_depth must be at least 1".into());
        assert!(err.to_string().contains("max_depth"));
    }

    #[test]
    fn error_conversion() {
        let config_err = ConfigError::Invalid("test".into());
        let explorer_err: ExplorerError = config_err.into();
        assert!(matches!(explorer_err, ExplorerError::Config(_)));
    }

    #[test]
    fn duplicate_object_message_names_reference() {
        let err = DocumentError::DuplicateObject(ObjectRef::new(4, 0));
        assert_eq!(err.to_string(), "Object 4 0 R is defined more than once");
    }
}
