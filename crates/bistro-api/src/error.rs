use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bistro_menu::ServiceError;
use bistro_store::StoreError;
use bistro_types::ErrorResponse;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid menu document: {0}")]
    InvalidDocument(#[source] serde_json::Error),

    #[error("Failed to save menu: {0}")]
    Persistence(#[from] ServiceError),

    #[error("No file uploaded in field 'image'")]
    MissingFile,

    #[error("Malformed upload: {0}")]
    MalformedUpload(String),

    #[error("Failed to store upload: {0}")]
    Upload(#[from] StoreError),

    #[error("Failed to render page: {0}")]
    Render(#[from] handlebars::RenderError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFile | ApiError::MalformedUpload(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidDocument(_)
            | ApiError::Persistence(_)
            | ApiError::Upload(_)
            | ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        error!("{} ({})", self, status);

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
