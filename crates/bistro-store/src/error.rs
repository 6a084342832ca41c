//! Error types for menu and upload persistence

use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem I/O errors
    #[error("Filesystem error: {path}")]
    FilesystemError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Document (de)serialization errors
    #[error("Serialization error: {message}")]
    SerializationError {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failures talking to a store behind the HTTP API
    #[error("Remote store error: {message}")]
    RemoteError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid store configuration
    #[error("Store configuration error: {message}")]
    Configuration { message: String },
}

impl StoreError {
    pub fn filesystem<P: Into<String>>(path: P, source: std::io::Error) -> Self {
        Self::FilesystemError {
            path: path.into(),
            source,
        }
    }

    pub fn serialization<S: Into<String>>(message: S, source: serde_json::Error) -> Self {
        Self::SerializationError {
            message: message.into(),
            source,
        }
    }

    pub fn remote<S: Into<String>>(message: S) -> Self {
        Self::RemoteError {
            message: message.into(),
            source: None,
        }
    }

    pub fn remote_with_source<
        S: Into<String>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::RemoteError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether the error means the document exists but is not a valid menu
    pub fn is_corrupt_document(&self) -> bool {
        matches!(self, Self::SerializationError { .. })
    }
}
