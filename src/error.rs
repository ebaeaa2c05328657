//! Error types for favcache
//!
//! All modules use `FavcacheResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for favcache operations
pub type FavcacheResult<T> = Result<T, FavcacheError>;

/// All errors that can occur in favcache
#[derive(Error, Debug)]
pub enum FavcacheError {
    // Cache layout errors
    #[error("Failed to create cache directory {path}: {source}")]
    CacheDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    // Fetch errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] ureq::Error),

    #[error("Unexpected HTTP status {status} for {url}")]
    UnexpectedStatus { url: String, status: u16 },

    // Lookup errors
    #[error("No cached icon for entry: {0}")]
    IconNotCached(String),

    #[error("Invalid entry id: {0}")]
    InvalidItemId(String),

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl FavcacheError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FavcacheError::IconNotCached("e1".to_string());
        assert!(err.to_string().contains("e1"));
    }

    #[test]
    fn io_error_keeps_context() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = FavcacheError::io("writing index", source);
        assert!(err.to_string().contains("writing index"));
    }

    #[test]
    fn status_error_names_url() {
        let err = FavcacheError::UnexpectedStatus {
            url: "https://example.com/icon.png".to_string(),
            status: 404,
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("example.com"));
    }
}
