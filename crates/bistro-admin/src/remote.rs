//! HTTP client for the bistro API.
//!
//! [`RemoteMenuStore`] persists the menu through `GET`/`PUT /api/menu`, so
//! the admin CLI can drive the same [`MenuService`](bistro_menu::MenuService)
//! the server uses.

use std::path::Path;

use async_trait::async_trait;
use bistro_store::{MenuStore, Result, StoreError};
use bistro_types::{ErrorResponse, Menu, UploadResponse};
use reqwest::multipart::{Form, Part};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct RemoteMenuStore {
    base_url: String,
    http_client: reqwest::Client,
}

impl RemoteMenuStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Upload an image file and return the URL the server stored it under
    pub async fn upload_image(&self, file: &Path) -> Result<String> {
        let bytes = tokio::fs::read(file)
            .await
            .map_err(|e| StoreError::filesystem(file.display().to_string(), e))?;
        let file_name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        debug!("Uploading {} ({} bytes)", file_name, bytes.len());
        let form = Form::new().part("image", Part::bytes(bytes).file_name(file_name));

        let response = self
            .http_client
            .post(self.url("/api/upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| StoreError::remote_with_source("upload request failed", e))?;

        let response = check_status(response).await?;
        let upload: UploadResponse = response
            .json()
            .await
            .map_err(|e| StoreError::remote_with_source("invalid upload response", e))?;
        Ok(upload.url)
    }
}

#[async_trait]
impl MenuStore for RemoteMenuStore {
    async fn load(&self) -> Result<Option<Menu>> {
        let response = self
            .http_client
            .get(self.url("/api/menu"))
            .send()
            .await
            .map_err(|e| StoreError::remote_with_source("menu request failed", e))?;

        let response = check_status(response).await?;
        let menu = response
            .json::<Menu>()
            .await
            .map_err(|e| StoreError::remote_with_source("invalid menu document", e))?;
        Ok(Some(menu))
    }

    async fn save(&self, menu: &Menu) -> Result<()> {
        let response = self
            .http_client
            .put(self.url("/api/menu"))
            .json(menu)
            .send()
            .await
            .map_err(|e| StoreError::remote_with_source("menu update failed", e))?;

        check_status(response).await?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("bistro API at {}", self.base_url)
    }
}

/// Turn a non-success response into an error carrying the server's
/// `{error}` message
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.error)
        .unwrap_or(body);
    Err(StoreError::remote(format!("server returned {status}: {message}")))
}
