//! Image uploads: files land in one directory under a random hex name

use std::path::{Path, PathBuf};

use rand::RngCore;
use tracing::info;

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};

/// Random bytes per generated file name (32 hex characters)
const NAME_BYTES: usize = 16;

/// A file written to the uploads directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    pub file_name: String,
    pub path: PathBuf,
    pub url: String,
}

/// Directory uploaded images are written to, plus the URL prefix it is
/// served under
#[derive(Debug, Clone)]
pub struct UploadDir {
    dir: PathBuf,
    url_prefix: String,
}

impl UploadDir {
    pub fn new<P: AsRef<Path>, S: Into<String>>(dir: P, url_prefix: S) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            url_prefix: url_prefix.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(&config.uploads_dir, config.uploads_url_prefix.clone())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `bytes` under a fresh random name keeping the extension of
    /// `original_name`. The directory is created if missing.
    pub async fn save(&self, original_name: Option<&str>, bytes: &[u8]) -> Result<StoredUpload> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StoreError::filesystem(self.dir.display().to_string(), e))?;

        let file_name = random_file_name(original_name);
        let path = self.dir.join(&file_name);

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| StoreError::filesystem(path.display().to_string(), e))?;

        let url = format!("{}/{}", self.url_prefix, file_name);
        info!("Stored upload {} ({} bytes)", url, bytes.len());

        Ok(StoredUpload {
            file_name,
            path,
            url,
        })
    }
}

/// 32 random hex characters followed by the original extension, if any
pub fn random_file_name(original_name: Option<&str>) -> String {
    let mut bytes = [0u8; NAME_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    let stem = hex::encode(bytes);

    match original_name.and_then(extension_of) {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem,
    }
}

fn extension_of(name: &str) -> Option<&str> {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn assert_hex_stem(name: &str) {
        let stem = name.split('.').next().unwrap();
        assert_eq!(stem.len(), 32);
        assert!(stem.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_random_name_keeps_extension() {
        let name = random_file_name(Some("photo.png"));
        assert!(name.ends_with(".png"));
        assert_hex_stem(&name);

        let name = random_file_name(Some("dish.final.JPEG"));
        assert!(name.ends_with(".JPEG"));
    }

    #[test]
    fn test_random_name_without_extension() {
        let name = random_file_name(Some("blob"));
        assert_eq!(name.len(), 32);
        assert_hex_stem(&name);

        assert_eq!(random_file_name(None).len(), 32);
        assert_ne!(random_file_name(None), random_file_name(None));
    }

    #[tokio::test]
    async fn test_save_writes_file_and_builds_url() {
        let dir = TempDir::new().unwrap();
        let uploads = UploadDir::new(dir.path().join("uploads"), "/uploads/");

        let stored = uploads.save(Some("oysters.png"), b"png-bytes").await.unwrap();

        assert!(stored.url.starts_with("/uploads/"));
        assert!(stored.url.ends_with(".png"));
        assert_hex_stem(&stored.file_name);
        assert_eq!(std::fs::read(&stored.path).unwrap(), b"png-bytes");
    }
}
