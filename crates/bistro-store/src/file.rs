use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bistro_types::Menu;
use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::store::MenuStore;

/// Menu document stored as a pretty-printed JSON file.
///
/// Every save rewrites the whole file. Parent directories are created on
/// first write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_string(&self) -> String {
        self.path.display().to_string()
    }
}

#[async_trait]
impl MenuStore for JsonFileStore {
    async fn load(&self) -> Result<Option<Menu>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Menu file {} does not exist yet", self.path_string());
                return Ok(None);
            }
            Err(e) => return Err(StoreError::filesystem(self.path_string(), e)),
        };

        let menu = serde_json::from_str(&content).map_err(|e| {
            StoreError::serialization(format!("invalid menu document in {}", self.path_string()), e)
        })?;

        Ok(Some(menu))
    }

    async fn save(&self, menu: &Menu) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::filesystem(parent.display().to_string(), e))?;
        }

        let body = serde_json::to_vec_pretty(menu)
            .map_err(|e| StoreError::serialization("failed to encode menu document", e))?;

        tokio::fs::write(&self.path, body)
            .await
            .map_err(|e| StoreError::filesystem(self.path_string(), e))?;

        info!(
            "Menu written to {} ({} categories)",
            self.path_string(),
            menu.len()
        );
        Ok(())
    }

    fn describe(&self) -> String {
        format!("JSON file at {}", self.path_string())
    }
}
