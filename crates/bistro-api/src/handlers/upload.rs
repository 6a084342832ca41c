use axum::{
    extract::{Multipart, State},
    response::Json,
};
use bistro_types::UploadResponse;
use tracing::debug;

use crate::error::ApiError;
use crate::types::ApiState;

/// Multipart field carrying the image
pub const IMAGE_FIELD: &str = "image";

/// Store the file sent in the `image` field under a random name and return
/// its public URL
pub async fn upload_image(
    State(state): State<ApiState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::MalformedUpload(e.body_text()))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            debug!("Skipping multipart field {:?}", field.name());
            continue;
        }

        let original_name = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::MalformedUpload(e.body_text()))?;

        let stored = state.uploads.save(original_name.as_deref(), &bytes).await?;
        return Ok(Json(UploadResponse { url: stored.url }));
    }

    Err(ApiError::MissingFile)
}
