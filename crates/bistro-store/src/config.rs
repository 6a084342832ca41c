//! Store configuration: which menu backend to use and where uploads go

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::StoreError;

/// Public URL prefix under which uploaded files are served
pub const DEFAULT_UPLOADS_URL_PREFIX: &str = "/uploads";

/// Backing storage for the menu document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Module-level document, lost on restart
    Memory,
    /// JSON file on disk
    File,
}

impl FromStr for StoreBackend {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "file" | "json" => Ok(Self::File),
            other => Err(StoreError::configuration(format!(
                "unknown menu store backend '{other}' (expected 'file' or 'memory')"
            ))),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::File => write!(f, "file"),
        }
    }
}

/// Configuration for menu and upload storage
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Menu backend
    pub backend: StoreBackend,
    /// Path of the JSON document for the file backend
    pub menu_path: PathBuf,
    /// Directory uploaded images are written to
    pub uploads_dir: PathBuf,
    /// URL prefix the uploads directory is served under
    pub uploads_url_prefix: String,
}

impl StoreConfig {
    /// File-backed menu at `menu_path`, uploads under `public/uploads`
    pub fn file<P: Into<PathBuf>>(menu_path: P) -> Self {
        Self {
            backend: StoreBackend::File,
            menu_path: menu_path.into(),
            uploads_dir: PathBuf::from("public/uploads"),
            uploads_url_prefix: DEFAULT_UPLOADS_URL_PREFIX.to_string(),
        }
    }

    /// In-memory menu, uploads under `public/uploads`
    pub fn memory() -> Self {
        Self {
            backend: StoreBackend::Memory,
            ..Self::default()
        }
    }

    pub fn with_backend(mut self, backend: StoreBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_uploads_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.uploads_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_uploads_url_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.uploads_url_prefix = prefix.into();
        self
    }

    /// Human readable description for startup logs
    pub fn describe(&self) -> String {
        match self.backend {
            StoreBackend::Memory => "in-memory document".to_string(),
            StoreBackend::File => format!("JSON file at {}", self.menu_path.display()),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::file("data/menu.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_str() {
        assert_eq!("memory".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert_eq!(" FILE ".parse::<StoreBackend>().unwrap(), StoreBackend::File);
        assert!("redis".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn test_config_builders() {
        let config = StoreConfig::memory().with_uploads_dir("/tmp/up");
        assert_eq!(config.backend, StoreBackend::Memory);
        assert_eq!(config.uploads_dir, PathBuf::from("/tmp/up"));
        assert_eq!(config.describe(), "in-memory document");

        let config = StoreConfig::file("public/menu.json");
        assert_eq!(config.describe(), "JSON file at public/menu.json");
        assert_eq!(config.uploads_url_prefix, "/uploads");
    }
}
